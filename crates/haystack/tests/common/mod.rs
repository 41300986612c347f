use assert_cmd::Command;
use axum::Router;

/// A fixture Pinboard API running on its own runtime for the life of a test.
pub struct FixtureServer {
    pub base_url: String,
    _runtime: tokio::runtime::Runtime,
}

impl FixtureServer {
    pub fn start(router: Router) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("build fixture runtime");

        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .expect("bind fixture server");
        let addr = listener.local_addr().expect("fixture server address");

        runtime.spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("fixture server crashed");
        });

        Self {
            base_url: format!("http://{addr}"),
            _runtime: runtime,
        }
    }

    /// `haystack` pointed at this server, isolated from the caller's environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("haystack").expect("haystack binary");
        for var in [
            "PINBOARD_USER",
            "PINBOARD_PASSWORD",
            "PINBOARD_AUTH_TOKEN",
            "PINBOARD_TIMEOUT",
            "PINBOARD_TAG_SEARCH",
            "HAYSTACK_VERBOSE",
            "RUST_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("PINBOARD_BASE_URL", &self.base_url).env("TZ", "UTC");
        cmd
    }
}
