#[cfg(test)]
mod tests {
    use super::super::{ApiClient, CatalogBackend, RequestError};
    use crate::schemas::{Catalog, Record};
    use mockito::{Matcher, Server};

    const PRODUCTS_BODY: &str = r#"[
        {"_id": "p1", "title": "Cold Pressed Juice", "price": 120},
        {"_id": "p2", "name": "Masala Chai", "igst": 5},
        {"_id": "p3", "title": "Ragi Cookies"}
    ]"#;

    const HSN_BODY: &str = r#"{"data": [
        {"id": 1, "hsn_code": "22020010", "description": "Mineral waters", "gst_rate": 18},
        {"id": 2, "hsn_code": "22020020", "description": "Aerated waters", "gst_rate": 28}
    ]}"#;

    fn client_for(server: &Server) -> ApiClient {
        ApiClient::new(server.url()).unwrap()
    }

    #[tokio::test]
    async fn test_product_search_without_query_omits_parameter() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_header("cache-control", "no-store")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PRODUCTS_BODY)
            .expect(1)
            .create_async()
            .await;

        let products = client_for(&server).search_products(None).await.unwrap();

        mock.assert_async().await;
        assert_eq!(products.len(), 3);
        let ids: Vec<_> = products
            .iter()
            .map(|p| p.get("_id").and_then(|v| v.as_str()).unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[tokio::test]
    async fn test_empty_query_is_treated_as_fetch_all() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .with_status(200)
            .with_body("[]")
            .expect(1)
            .create_async()
            .await;

        let products = client_for(&server).search_products(Some("")).await.unwrap();

        mock.assert_async().await;
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_product_search_encodes_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::UrlEncoded(
                "q".to_string(),
                "tea & coffee/100%".to_string(),
            ))
            .with_status(200)
            .with_body(PRODUCTS_BODY)
            .expect(1)
            .create_async()
            .await;

        let products = client_for(&server)
            .search_products(Some("tea & coffee/100%"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(products.len(), 3);
    }

    #[tokio::test]
    async fn test_hsn_search_unwraps_envelope() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/hsn")
            .match_query(Matcher::UrlEncoded(
                "search".to_string(),
                "2202".to_string(),
            ))
            .match_header("cache-control", "no-store")
            .with_status(200)
            .with_body(HSN_BODY)
            .expect(1)
            .create_async()
            .await;

        let records = client_for(&server).search_hsn(Some("2202")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].hsn_code, "22020010");
        assert_eq!(records[1].gst_rate, 28.0);
    }

    #[tokio::test]
    async fn test_hsn_search_without_data_is_empty() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/hsn")
            .with_status(200)
            .with_body(r#"{"message": "ok"}"#)
            .create_async()
            .await;

        let records = client_for(&server).search_hsn(None).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_carries_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let err = client_for(&server).search_products(None).await.unwrap_err();

        assert!(matches!(err, RequestError::Status { status: 500 }));
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "API error: 500");
    }

    #[tokio::test]
    async fn test_invalid_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let err = client_for(&server).search_products(None).await.unwrap_err();

        assert!(matches!(
            err,
            RequestError::Decode {
                endpoint: "/search",
                ..
            }
        ));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();

        let err = client.search_products(None).await.unwrap_err();

        assert!(matches!(err, RequestError::Transport(_)));
        assert!(err.to_string().starts_with("Network error"));
    }

    #[tokio::test]
    async fn test_catalog_dispatch_wraps_records() {
        let mut server = Server::new_async().await;
        let _products = server
            .mock("GET", "/search")
            .with_status(200)
            .with_body(PRODUCTS_BODY)
            .create_async()
            .await;
        let _hsn = server
            .mock("GET", "/hsn")
            .with_status(200)
            .with_body(HSN_BODY)
            .create_async()
            .await;
        let client = client_for(&server);

        let products = client.search(Catalog::Products, None).await.unwrap();
        let hsn = client.search(Catalog::Hsn, None).await.unwrap();

        assert!(products.iter().all(|r| matches!(r, Record::Product(_))));
        assert!(hsn.iter().all(|r| matches!(r, Record::Hsn(_))));
        assert_eq!(hsn.len(), 2);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }
}
