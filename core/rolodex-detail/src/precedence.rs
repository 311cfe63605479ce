//! Ranks that decide which label and presence survive a merge.
//!
//! Higher ranks win. Both functions are total: anything they do not know
//! ranks at the bottom.

use rolodex_model::types::{CUSTOM, common, organization, phone};
use rolodex_types::Category;

/// Presence status codes, lowest to highest.
pub mod presence {
    pub const OFFLINE: i32 = 0;
    pub const INVISIBLE: i32 = 1;
    pub const AWAY: i32 = 2;
    pub const IDLE: i32 = 3;
    pub const DO_NOT_DISTURB: i32 = 4;
    pub const AVAILABLE: i32 = 5;
}

// Best first.
const PHONE_ORDER: &[i64] = &[
    CUSTOM,
    phone::MAIN,
    phone::MOBILE,
    phone::HOME,
    phone::WORK,
    phone::OTHER,
    phone::FAX_HOME,
    phone::FAX_WORK,
    phone::PAGER,
];

const COMMON_ORDER: &[i64] = &[CUSTOM, common::HOME, common::WORK, common::OTHER];

const ORGANIZATION_ORDER: &[i64] = &[CUSTOM, organization::WORK, organization::OTHER];

fn order_for(category: &Category) -> Option<&'static [i64]> {
    match category {
        Category::Phone => Some(PHONE_ORDER),
        Category::Email | Category::StructuredPostal | Category::Im => Some(COMMON_ORDER),
        Category::Organization => Some(ORGANIZATION_ORDER),
        _ => None,
    }
}

/// Rank of a type code within its category. Unlisted codes, missing codes
/// and categories without an order rank 0.
#[must_use]
pub fn type_precedence(category: Option<&Category>, type_code: Option<i64>) -> i32 {
    let (Some(order), Some(code)) = (category.and_then(order_for), type_code) else {
        return 0;
    };
    order
        .iter()
        .position(|&t| t == code)
        .map_or(0, |index| (order.len() - index) as i32)
}

/// Rank of a presence code. Missing or unknown codes rank -1.
#[must_use]
pub fn presence_precedence(code: Option<i32>) -> i32 {
    match code {
        Some(c @ presence::OFFLINE..=presence::AVAILABLE) => c,
        _ => -1,
    }
}
