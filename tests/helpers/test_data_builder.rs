// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use bom_tracker::domain::document::VendorDocument;
use bom_tracker::domain::item::{BomItem, FinalizedVendor};
use bom_tracker::domain::types::{DocumentType, ItemStatus, ItemType};
use chrono::NaiveDate;

// ==========================================
// BomItem 构建器
// ==========================================

pub struct ItemBuilder {
    item: BomItem,
}

impl ItemBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            item: BomItem::new(id, name, ItemType::Component),
        }
    }

    pub fn service(mut self) -> Self {
        self.item.item_type = ItemType::Service;
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.item.status = status;
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.item.quantity = quantity;
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.item.category = Some(category.to_string());
        self
    }

    pub fn order_date(mut self, date: NaiveDate) -> Self {
        self.item.order_date = Some(date);
        self
    }

    pub fn expected_arrival(mut self, date: NaiveDate) -> Self {
        self.item.expected_arrival = Some(date);
        self
    }

    pub fn actual_arrival(mut self, date: NaiveDate) -> Self {
        self.item.actual_arrival = Some(date);
        self
    }

    pub fn linked_po(mut self, document_id: &str) -> Self {
        self.item.linked_po_document_id = Some(document_id.to_string());
        self
    }

    pub fn vendor(mut self, name: &str, lead_time: &str) -> Self {
        self.item.finalized_vendor = Some(FinalizedVendor {
            vendor_id: None,
            name: name.to_string(),
            lead_time: Some(lead_time.to_string()),
            contact: None,
        });
        self
    }

    pub fn build(self) -> BomItem {
        self.item
    }
}

/// 已下单、指定预计到货日的部件条目
pub fn ordered_item(id: &str, expected_arrival: NaiveDate) -> BomItem {
    ItemBuilder::new(id, &format!("物料-{}", id))
        .status(ItemStatus::Ordered)
        .order_date(expected_arrival - chrono::Duration::days(30))
        .expected_arrival(expected_arrival)
        .build()
}

// ==========================================
// VendorDocument 构建器
// ==========================================

pub fn po_document(id: &str, linked_item_ids: &[&str]) -> VendorDocument {
    let mut doc = VendorDocument::new(id, DocumentType::OutgoingPo);
    doc.linked_bom_item_ids = linked_item_ids.iter().map(|s| s.to_string()).collect();
    doc
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("测试日期非法")
}
