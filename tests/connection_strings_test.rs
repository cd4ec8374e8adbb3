use envecho::config::database::{ConnectionStrings, Deployment, DOCKER_HOST_VAR};

fn with_docker_host(host: Option<&str>) -> ConnectionStrings {
    ConnectionStrings::from_lookup(|key| {
        if key == DOCKER_HOST_VAR {
            host.map(str::to_string)
        } else {
            None
        }
    })
}

#[test]
fn test_exported_object_has_exactly_three_keys() {
    for host in [None, Some("10.0.0.5")] {
        let value = serde_json::to_value(with_docker_host(host)).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["dockerUrl", "localUrl", "remoteUrl"]);

        for url in object.values() {
            assert!(!url.as_str().unwrap().is_empty());
        }
    }
}

#[test]
fn test_missing_docker_host_is_not_corrected() {
    let urls = with_docker_host(None);

    assert_eq!(urls.docker_url, "mongodb://undefined/test");
    assert_eq!(urls.url_for(Deployment::Docker), "mongodb://undefined/test");
}

#[test]
fn test_docker_host_is_interpolated_without_validation() {
    let urls = with_docker_host(Some("not a host"));

    assert_eq!(urls.docker_url, "mongodb://not a host/test");
}

#[test]
fn test_serialized_values() {
    let value = serde_json::to_value(with_docker_host(Some("mongo"))).unwrap();

    assert_eq!(value["remoteUrl"], "mongodb://localhost:27017/test");
    assert_eq!(value["localUrl"], "mongodb://localhost/test");
    assert_eq!(value["dockerUrl"], "mongodb://mongo/test");
}

#[tokio::test]
async fn test_connect_resolves_default_database() {
    // Client construction is lazy, no server is contacted here.
    let urls = with_docker_host(None);

    let db = envecho::config::database::connect(&urls, Deployment::Local)
        .await
        .unwrap();

    assert_eq!(db.name(), "test");
}
