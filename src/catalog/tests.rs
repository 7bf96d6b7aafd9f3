//! Catalog Module Tests
//!
//! Validates how listings enter the catalog and how the snapshot is served.
//!
//! ## Test Scopes
//! - **Builder**: Rejection, defaults, name synthesis and the featured flag.
//! - **Loader**: Parsing the scraper's JSON, including numeric scalars.
//! - **Store**: Snapshot reads, atomic replacement and reload from disk.
//! - **Handlers**: Product listing and reload endpoints.
//!
//! *Note: Reload tests use temporary files; nothing touches the real catalog.*

#[cfg(test)]
mod tests {
    use crate::catalog::builder::{build, infer_name};
    use crate::catalog::handlers::{handle_list_products, handle_reload_catalog};
    use crate::catalog::loader::{load_catalog, parse_catalog};
    use crate::catalog::store::CatalogStore;
    use crate::catalog::types::{
        CatalogRecord, PLACEHOLDER_IMAGE, ProductView, RawProduct, is_featured_rating,
    };
    use axum::Extension;
    use axum::http::StatusCode;
    use std::io::Write;
    use std::sync::Arc;

    const CATALOG_JSON: &str = r#"[
        {
            "Tên sản phẩm": "Tủ lạnh Samsung Inverter 236 lít",
            "Ảnh": "https://cdn.example.vn/samsung.jpg",
            "Giá": "6.490.000₫",
            "Giá cũ": "7.290.000₫",
            "Mô tả sản phẩm": "Kiểu tủ: Ngăn đá trên. Dung tích sử dụng: 236 lít. Sản xuất tại: Việt Nam.",
            "Điểm đánh giá trung bình": 4.9,
            "Số lượt đánh giá": "128 đánh giá",
            "Nguồn dữ liệu": "dienmayxanh",
            "Loại sản phẩm": "Tủ lạnh"
        },
        {
            "Mô tả sản phẩm": "Loại Tivi: Smart TV. Kích cỡ màn hình: 55 inch. Năm ra mắt: 2022."
        },
        {
            "Tên sản phẩm": "",
            "Mô tả sản phẩm": "",
            "Giá": "1.000.000₫"
        },
        {
            "Tên sản phẩm": "Máy giặt LG 9 kg",
            "Điểm đánh giá trung bình": null
        }
    ]"#;

    fn raw(name: &str, description: &str) -> RawProduct {
        RawProduct {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            ..RawProduct::default()
        }
    }

    fn record_with_rating(rating: &str) -> CatalogRecord {
        let mut record = build(raw("Tivi", "")).unwrap();
        record.rating = rating.to_string();
        record
    }

    // ============================================================
    // BUILDER TESTS
    // ============================================================

    #[test]
    fn test_build_rejects_empty_name_and_description() {
        assert!(build(raw("", "")).is_none());
        assert!(build(RawProduct::default()).is_none());
    }

    #[test]
    fn test_build_whitespace_counts_as_empty() {
        assert!(build(raw("   ", "  \t")).is_none());

        let record = build(raw("   ", "Loại Tivi: OLED.")).unwrap();
        assert_eq!(record.name, "Tivi");
    }

    #[test]
    fn test_build_keeps_given_name() {
        let record = build(raw("Tủ lạnh Aqua", "Kiểu tủ: Ngăn đá trên.")).unwrap();
        assert_eq!(record.name, "Tủ lạnh Aqua");
    }

    #[test]
    fn test_build_fills_defaults() {
        let record = build(raw("Quạt điện", "")).unwrap();

        assert_eq!(record.image, PLACEHOLDER_IMAGE);
        assert_eq!(record.price, "0");
        assert_eq!(record.rating, "0");
        assert_eq!(record.rating_count, "0 đánh giá");
        assert_eq!(record.source, "");
        assert_eq!(record.product_type, "");
        assert!(record.old_price.is_none());
    }

    #[test]
    fn test_build_synthesizes_tv_name() {
        let record = build(raw(
            "",
            "Loại Tivi: Smart TV. Kích cỡ màn hình: 55 inch. Năm ra mắt: 2022.",
        ))
        .unwrap();

        assert_eq!(record.name, "Tivi 55 inch (2022)");
    }

    #[test]
    fn test_infer_name_fridge_capacity() {
        assert_eq!(
            infer_name("Kiểu tủ: Ngăn đá trên. Dung tích sử dụng: 300 lít."),
            "Tủ lạnh 300 lít"
        );
    }

    #[test]
    fn test_infer_name_washer() {
        assert_eq!(
            infer_name("Loại máy giặt: Cửa trước. Năm ra mắt: 2024."),
            "Máy giặt (2024)"
        );
    }

    #[test]
    fn test_infer_name_fallback_category() {
        assert_eq!(infer_name("Bảo hành chính hãng 12 tháng"), "Sản phẩm");
    }

    #[test]
    fn test_infer_name_fridge_marker_wins() {
        let description = "Loại Tivi: Smart TV. Kiểu tủ: Side by side.";
        assert_eq!(infer_name(description), "Tủ lạnh");
    }

    #[test]
    fn test_infer_name_prefers_capacity_over_screen() {
        let description = "Kích cỡ màn hình: 10 inch. Dung tích sử dụng: 600 lít. Kiểu tủ: Side by side.";
        assert_eq!(infer_name(description), "Tủ lạnh 600 lít");
    }

    #[test]
    fn test_synthesized_name_never_empty() {
        let record = build(raw("", "mô tả ngắn")).unwrap();
        assert!(!record.name.is_empty());
    }

    // ============================================================
    // FEATURED TESTS
    // ============================================================

    #[test]
    fn test_featured_boundary() {
        assert!(is_featured_rating("4.8"));
        assert!(is_featured_rating("5"));
        assert!(!is_featured_rating("4.79"));
    }

    #[test]
    fn test_featured_unparsable() {
        assert!(!is_featured_rating(""));
        assert!(!is_featured_rating("chưa có"));
        assert!(!is_featured_rating("4,9"));
    }

    #[test]
    fn test_featured_trims_whitespace() {
        assert!(is_featured_rating(" 4.9 "));
    }

    #[test]
    fn test_record_featured_flag() {
        assert!(record_with_rating("4.8").is_featured());
        assert!(!record_with_rating("0").is_featured());
    }

    // ============================================================
    // LOADER TESTS
    // ============================================================

    #[test]
    fn test_parse_catalog_builds_and_skips() {
        let records = parse_catalog(CATALOG_JSON).unwrap();

        assert_eq!(records.len(), 3, "The entry without name and description is skipped");
        assert_eq!(records[0].name, "Tủ lạnh Samsung Inverter 236 lít");
        assert_eq!(records[1].name, "Tivi 55 inch (2022)");
        assert_eq!(records[2].name, "Máy giặt LG 9 kg");
    }

    #[test]
    fn test_parse_catalog_reads_all_fields() {
        let records = parse_catalog(CATALOG_JSON).unwrap();
        let fridge = &records[0];

        assert_eq!(fridge.image, "https://cdn.example.vn/samsung.jpg");
        assert_eq!(fridge.price, "6.490.000₫");
        assert_eq!(fridge.old_price.as_deref(), Some("7.290.000₫"));
        assert_eq!(fridge.rating, "4.9");
        assert_eq!(fridge.rating_count, "128 đánh giá");
        assert_eq!(fridge.source, "dienmayxanh");
        assert_eq!(fridge.product_type, "Tủ lạnh");
        assert!(fridge.is_featured());
        assert_eq!(fridge.price_amount(), 6_490_000);
    }

    #[test]
    fn test_parse_catalog_null_uses_default() {
        let records = parse_catalog(CATALOG_JSON).unwrap();
        assert_eq!(records[2].rating, "0");
    }

    #[test]
    fn test_parse_catalog_rejects_malformed_json() {
        assert!(parse_catalog("{ not json").is_err());
        assert!(parse_catalog(r#"{"Tên sản phẩm": "x"}"#).is_err());
    }

    #[test]
    fn test_parse_catalog_empty_array() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_catalog_missing_file() {
        let result = load_catalog(std::path::Path::new("/nonexistent/catalog.json")).await;
        assert!(result.is_err());
    }

    // ============================================================
    // VIEW TESTS
    // ============================================================

    #[test]
    fn test_product_view_serialization() {
        let records = parse_catalog(CATALOG_JSON).unwrap();
        let json = serde_json::to_value(ProductView::from(&records[0])).unwrap();

        assert_eq!(json["Tên sản phẩm"], "Tủ lạnh Samsung Inverter 236 lít");
        assert_eq!(json["Giá cũ"], "7.290.000₫");
        assert_eq!(json["formatted_price"], "6.490.000₫");
        assert_eq!(json["Nguồn dữ liệu"], "dienmayxanh");
        assert_eq!(json["key_info"], "236 lít • Ngăn đá trên • Sản xuất: Việt Nam");
        assert_eq!(json["is_featured"], true);
        assert_eq!(json["specifications"][0]["label"], "Loại sản phẩm");
        assert_eq!(json["specifications"][0]["value"], "Ngăn đá trên");
    }

    #[test]
    fn test_product_view_omits_empty_optionals() {
        let records = parse_catalog(CATALOG_JSON).unwrap();
        let json = serde_json::to_value(ProductView::from(&records[1])).unwrap();

        assert!(json.get("Giá cũ").is_none());
        assert!(json.get("Nguồn dữ liệu").is_none());
        assert_eq!(json["Ảnh"], PLACEHOLDER_IMAGE);
        assert_eq!(json["is_featured"], false);
        assert_eq!(json["formatted_price"], "0₫");
    }

    // ============================================================
    // STORE TESTS
    // ============================================================

    #[test]
    fn test_store_list_all_is_catalog() {
        let records = parse_catalog(CATALOG_JSON).unwrap();
        let store = CatalogStore::new(records.clone());

        assert_eq!(*store.list_all(), records);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_store_search() {
        let store = CatalogStore::new(parse_catalog(CATALOG_JSON).unwrap());

        let results = store.search("tivi");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Tivi 55 inch (2022)");

        assert_eq!(store.search("").len(), 3);
    }

    #[test]
    fn test_store_replace_keeps_old_snapshot_alive() {
        let store = CatalogStore::new(parse_catalog(CATALOG_JSON).unwrap());
        let before = store.snapshot();

        store.replace(Vec::new());

        assert_eq!(before.len(), 3, "Readers keep the snapshot they loaded");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_store_reload_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();
        file.flush().unwrap();

        let store = CatalogStore::open(file.path()).await.unwrap();
        assert_eq!(store.len(), 3);

        std::fs::write(file.path(), r#"[{"Tên sản phẩm": "Nồi cơm điện"}]"#).unwrap();
        let count = store.reload().await.unwrap();

        assert_eq!(count, 1);
        assert_eq!(store.list_all()[0].name, "Nồi cơm điện");
    }

    #[tokio::test]
    async fn test_store_failed_reload_keeps_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();
        file.flush().unwrap();

        let store = CatalogStore::open(file.path()).await.unwrap();
        std::fs::write(file.path(), "garbage").unwrap();

        assert!(store.reload().await.is_err());
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_store_reload_without_source() {
        let store = CatalogStore::new(Vec::new());
        assert!(store.reload().await.is_err());
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_handle_list_products() {
        let store = Arc::new(CatalogStore::new(parse_catalog(CATALOG_JSON).unwrap()));

        let response = handle_list_products(Extension(store)).await;

        let names: Vec<&str> = response.0.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Tủ lạnh Samsung Inverter 236 lít",
                "Tivi 55 inch (2022)",
                "Máy giặt LG 9 kg",
            ]
        );
    }

    #[tokio::test]
    async fn test_handle_reload_catalog_success() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();
        file.flush().unwrap();
        let store = Arc::new(CatalogStore::open(file.path()).await.unwrap());

        let (status, body) = handle_reload_catalog(Extension(store)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.0.status, "reloaded");
        assert_eq!(body.0.count, Some(3));
    }

    #[tokio::test]
    async fn test_handle_reload_catalog_failure() {
        let store = Arc::new(CatalogStore::new(Vec::new()));

        let (status, body) = handle_reload_catalog(Extension(store)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.status, "reload_failed");
        assert!(body.0.error.is_some());
    }
}
