//! MongoDB test infrastructure

use mongodb::{Client, Database};
use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mongo::Mongo;

/// Disposable MongoDB server for integration tests.
///
/// The container is stopped and removed when this value is dropped.
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let db = mongo.database("shop_test");
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    pub connection_string: String,
}

impl TestMongo {
    pub async fn new() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);

        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("Failed to create MongoDB client");

        tracing::info!(port = host_port, "Test MongoDB ready");

        Self {
            container,
            client,
            connection_string,
        }
    }

    pub fn client(&self) -> Client {
        self.client.clone()
    }

    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}
