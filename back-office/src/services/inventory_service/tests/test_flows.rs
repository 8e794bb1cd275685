use super::*;

// ========================================================================
// Filtering
// ========================================================================

#[test]
fn test_category_filter_keeps_matching_entries() {
    let service = create_test_service(two_entry_catalog());

    service
        .set_filter(FilterSpec {
            categories: vec!["上衣".to_string()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(visible_ids(&service), vec!["1"]);
    assert_eq!(service.page().active_filter_count, 1);
}

#[test]
fn test_out_of_stock_filter() {
    let service = create_test_service(two_entry_catalog());

    service
        .set_filter(FilterSpec {
            stock_status: StockStatus::OutOfStock,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(visible_ids(&service), vec!["2"]);
    assert_eq!(service.page().items[0].inventory, "缺貨");

    service.reset_filter();
    assert_eq!(visible_ids(&service), vec!["1", "2"]);
}

#[test]
fn test_filter_change_prunes_selection() {
    let service = create_test_service(two_entry_catalog());
    service.select_row("1", true).unwrap();
    service.select_row("2", true).unwrap();

    service
        .set_filter(FilterSpec {
            categories: vec!["褲子".to_string()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(service.selected_ids(), vec!["2"]);

    // Widening the filter does not bring the pruned id back
    service.reset_filter();
    assert_eq!(service.selected_ids(), vec!["2"]);
}

// ========================================================================
// Search
// ========================================================================

#[test]
fn test_search_clears_selection_and_resets_page() {
    let service = create_test_service(twelve_entry_catalog());
    service.set_current_page(2).unwrap();
    service.select_row("p06", true).unwrap();

    service.search("商品");
    let page = service.page();
    assert!(page.selected_ids.is_empty());
    assert_eq!(page.page_info.page, 1);
    assert_eq!(page.query, "商品");
}

#[test]
fn test_same_query_keeps_selection() {
    let service = create_test_service(twelve_entry_catalog());
    service.search("商品");
    service.select_row("p01", true).unwrap();

    service.search("商品");
    assert_eq!(service.selected_ids(), vec!["p01"]);
}

#[test]
fn test_search_matches_bare_price() {
    let service = create_test_service(twelve_entry_catalog());
    // p12 costs NT$ 1,200
    service.search("1200");
    assert_eq!(visible_ids(&service), vec!["p12"]);
    assert_eq!(service.filtered_count(), 1);
}

// ========================================================================
// Pagination
// ========================================================================

#[test]
fn test_twelve_entries_make_three_pages() {
    let service = create_test_service(twelve_entry_catalog());
    let info = service.page().page_info;
    assert_eq!(info.total_pages, 3);
    assert_eq!(info.limit, 5);
    assert_eq!(visible_ids(&service), vec!["p01", "p02", "p03", "p04", "p05"]);

    service.set_current_page(3).unwrap();
    assert_eq!(visible_ids(&service), vec!["p11", "p12"]);
    assert_eq!(service.page().page_info.display_range(), (11, 12));
}

#[test]
fn test_deleting_eight_on_last_page_clamps_to_first() {
    let service = create_test_service(twelve_entry_catalog());
    service.set_current_page(3).unwrap();

    let removed = service
        .delete_many(["p01", "p02", "p03", "p04", "p05", "p06", "p07", "p08"])
        .unwrap();
    assert_eq!(removed, 8);

    let info = service.page().page_info;
    assert_eq!(info.total_pages, 1);
    assert_eq!(info.page, 1);
    assert_eq!(visible_ids(&service), vec!["p09", "p10", "p11", "p12"]);
}

#[test]
fn test_rows_per_page_change_keeps_page_when_in_range() {
    let service = create_test_service(twelve_entry_catalog());
    service.set_current_page(2).unwrap();

    service.set_rows_per_page(10).unwrap();
    let info = service.page().page_info;
    assert_eq!(info.page, 2);
    assert_eq!(visible_ids(&service), vec!["p11", "p12"]);

    service.set_rows_per_page(20).unwrap();
    assert_eq!(service.page().page_info.page, 1);
}

// ========================================================================
// Selection
// ========================================================================

#[test]
fn test_select_all_tri_state() {
    let service = create_test_service(twelve_entry_catalog());

    service.select_all_on_page(true);
    assert_eq!(service.page().select_all_state, SelectAllState::Checked);
    assert_eq!(service.selected_ids().len(), 5);

    service.select_row("p03", false).unwrap();
    assert_eq!(service.page().select_all_state, SelectAllState::Indeterminate);

    service.select_all_on_page(false);
    assert_eq!(service.page().select_all_state, SelectAllState::Unchecked);
    assert!(service.selected_ids().is_empty());
}

#[test]
fn test_selection_survives_page_change() {
    let service = create_test_service(twelve_entry_catalog());
    service.select_all_on_page(true);
    service.set_current_page(2).unwrap();

    let page = service.page();
    assert_eq!(page.select_all_state, SelectAllState::Unchecked);
    assert_eq!(page.selected_ids.len(), 5);
}

// ========================================================================
// Catalog mutations
// ========================================================================

#[test]
fn test_add_entry_generates_uuid_and_timestamps() {
    let service = create_test_service(two_entry_catalog());
    let added = service.add_entry(new_entry("羊毛圍巾", "配件", 680)).unwrap();

    assert!(uuid::Uuid::parse_str(&added.id).is_ok());
    assert!(added.created_at > 0);
    assert_eq!(added.created_at, added.updated_at);
    assert_eq!(service.list_entries().len(), 3);
    assert_eq!(service.get_entry(&added.id), Some(added));
}

#[test]
fn test_edit_entry_merges_fields_and_keeps_page() {
    let service = create_test_service(twelve_entry_catalog());
    service.set_current_page(2).unwrap();
    service.select_row("p07", true).unwrap();

    let updated = service
        .edit_entry(
            "p07",
            CatalogEntryUpdate {
                price: Some(Decimal::from(999)),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.price, Decimal::from(999));
    assert_eq!(updated.name, "商品 7");
    assert!(updated.updated_at > 0);

    let page = service.page();
    assert_eq!(page.page_info.page, 2);
    assert_eq!(page.selected_ids, vec!["p07"]);
    assert_eq!(page.items[1].price, "NT$ 999");
}

#[test]
fn test_edit_that_leaves_filter_prunes_selection() {
    let service = create_test_service(two_entry_catalog());
    service
        .set_filter(FilterSpec {
            categories: vec!["上衣".to_string()],
            ..Default::default()
        })
        .unwrap();
    service.select_row("1", true).unwrap();

    service
        .edit_entry(
            "1",
            CatalogEntryUpdate {
                category: Some("外套".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(visible_ids(&service).is_empty());
    assert!(service.selected_ids().is_empty());
}

#[test]
fn test_delete_selected_clears_selection() {
    let service = create_test_service(twelve_entry_catalog());
    service.select_all_on_page(true);

    assert_eq!(service.delete_selected().unwrap(), 5);
    assert!(service.selected_ids().is_empty());
    assert_eq!(service.list_entries().len(), 7);
    assert_eq!(service.page().page_info.total_pages, 2);
}

#[test]
fn test_delete_entry_prunes_selection() {
    let service = create_test_service(two_entry_catalog());
    service.select_row("1", true).unwrap();

    service.delete_entry("1").unwrap();
    assert!(service.selected_ids().is_empty());
    assert!(service.get_entry("1").is_none());
}

// ========================================================================
// Delete dialog
// ========================================================================

#[test]
fn test_single_delete_dialog_flow() {
    let service = create_test_service(two_entry_catalog());

    let pending = service
        .request_delete(DeleteTarget::Single("2".to_string()))
        .unwrap();
    assert_eq!(pending.count, 1);
    assert_eq!(service.page().pending_delete, Some(pending));

    assert_eq!(service.confirm_delete().unwrap(), 1);
    assert!(service.pending_delete().is_none());
    assert_eq!(visible_ids(&service), vec!["1"]);
}

#[test]
fn test_bulk_delete_dialog_flow() {
    let service = create_test_service(twelve_entry_catalog());
    service.select_row("p01", true).unwrap();
    service.select_row("p02", true).unwrap();

    let pending = service.request_delete(DeleteTarget::Selected).unwrap();
    assert_eq!(pending.count, 2);

    assert_eq!(service.confirm_delete().unwrap(), 2);
    assert!(service.selected_ids().is_empty());
    assert_eq!(service.list_entries().len(), 10);
}

#[test]
fn test_cancel_delete_keeps_catalog() {
    let service = create_test_service(two_entry_catalog());
    service
        .request_delete(DeleteTarget::Single("1".to_string()))
        .unwrap();

    service.cancel_delete();
    assert!(service.pending_delete().is_none());
    assert_eq!(service.list_entries().len(), 2);
}

#[test]
fn test_open_add_entry_navigates() {
    let calls = Arc::new(Mutex::new(0));
    let counter = calls.clone();
    let service = create_test_service(vec![]).with_navigator(move || *counter.lock() += 1);

    service.open_add_entry();
    assert_eq!(*calls.lock(), 1);
}

#[test]
fn test_clones_share_state() {
    let service = create_test_service(two_entry_catalog());
    let other = service.clone();

    other.delete_entry("1").unwrap();
    assert_eq!(visible_ids(&service), vec!["2"]);
}
