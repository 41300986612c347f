use axum::Router;

/// Serve `router` on an ephemeral local port, returning its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture server");
    let addr = listener.local_addr().expect("fixture server address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("fixture server crashed");
    });

    format!("http://{addr}")
}
