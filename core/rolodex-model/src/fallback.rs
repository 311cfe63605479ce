//! Built-in account type used for records whose account type is unknown,
//! and for kinds an account type does not declare itself.

use rolodex_types::mimetype;

use crate::{AccountType, AccountTypeKey, DataKind, EditType, columns};

/// Icon names used by the built-in kinds.
pub mod icons {
    pub const CALL: &str = "call";
    pub const SMS: &str = "sms";
    pub const EMAIL: &str = "email";
    pub const MAP: &str = "map";
    pub const TALK: &str = "talk";
    pub const WEB: &str = "web";
    pub const ADD_NETWORK: &str = "add_network";
}

/// Type codes of the well-known categories.
pub mod types {
    pub const CUSTOM: i64 = 0;

    pub mod phone {
        pub const HOME: i64 = 1;
        pub const MOBILE: i64 = 2;
        pub const WORK: i64 = 3;
        pub const FAX_WORK: i64 = 4;
        pub const FAX_HOME: i64 = 5;
        pub const PAGER: i64 = 6;
        pub const OTHER: i64 = 7;
        pub const CALLBACK: i64 = 8;
        pub const CAR: i64 = 9;
        pub const COMPANY_MAIN: i64 = 10;
        pub const ISDN: i64 = 11;
        pub const MAIN: i64 = 12;
        pub const OTHER_FAX: i64 = 13;
        pub const RADIO: i64 = 14;
        pub const TELEX: i64 = 15;
        pub const TTY_TDD: i64 = 16;
        pub const WORK_MOBILE: i64 = 17;
        pub const WORK_PAGER: i64 = 18;
        pub const ASSISTANT: i64 = 19;
        pub const MMS: i64 = 20;
    }

    /// Shared by email, postal and instant messaging.
    pub mod common {
        pub const HOME: i64 = 1;
        pub const WORK: i64 = 2;
        pub const OTHER: i64 = 3;
    }

    pub mod email {
        pub const MOBILE: i64 = 4;
    }

    pub mod organization {
        pub const WORK: i64 = 1;
        pub const OTHER: i64 = 2;
    }

    pub mod event {
        pub const ANNIVERSARY: i64 = 1;
        pub const OTHER: i64 = 2;
        pub const BIRTHDAY: i64 = 3;
    }

    pub mod relation {
        pub const ASSISTANT: i64 = 1;
        pub const BROTHER: i64 = 2;
        pub const CHILD: i64 = 3;
        pub const DOMESTIC_PARTNER: i64 = 4;
        pub const FATHER: i64 = 5;
        pub const FRIEND: i64 = 6;
        pub const MANAGER: i64 = 7;
        pub const MOTHER: i64 = 8;
        pub const PARENT: i64 = 9;
        pub const PARTNER: i64 = 10;
        pub const REFERRED_BY: i64 = 11;
        pub const RELATIVE: i64 = 12;
        pub const SISTER: i64 = 13;
        pub const SPOUSE: i64 = 14;
    }
}

/// The fallback account type with every well-known kind.
#[must_use]
pub fn fallback_account_type() -> AccountType {
    use types::{common, event, organization, phone, relation};

    let custom = |label: &str| EditType::custom(types::CUSTOM, label, columns::LABEL);

    AccountType::new(AccountTypeKey::default(), "Phone-only")
        .with_kind(DataKind::new(mimetype::STRUCTURED_NAME, "Name"))
        .with_kind(
            DataKind::new(mimetype::PHONE, "Phone")
                .with_icon(icons::CALL)
                .with_icon_alt(icons::SMS)
                .with_types(
                    columns::TYPE,
                    vec![
                        EditType::new(phone::HOME, "Home"),
                        EditType::new(phone::MOBILE, "Mobile"),
                        EditType::new(phone::WORK, "Work"),
                        EditType::new(phone::FAX_WORK, "Work Fax"),
                        EditType::new(phone::FAX_HOME, "Home Fax"),
                        EditType::new(phone::PAGER, "Pager"),
                        EditType::new(phone::OTHER, "Other"),
                        EditType::new(phone::CALLBACK, "Callback"),
                        EditType::new(phone::CAR, "Car"),
                        EditType::new(phone::COMPANY_MAIN, "Company Main"),
                        EditType::new(phone::ISDN, "ISDN"),
                        EditType::new(phone::MAIN, "Main"),
                        EditType::new(phone::OTHER_FAX, "Other Fax"),
                        EditType::new(phone::RADIO, "Radio"),
                        EditType::new(phone::TELEX, "Telex"),
                        EditType::new(phone::TTY_TDD, "TTY TDD"),
                        EditType::new(phone::WORK_MOBILE, "Work Mobile"),
                        EditType::new(phone::WORK_PAGER, "Work Pager"),
                        EditType::custom(phone::ASSISTANT, "Assistant", columns::LABEL),
                        EditType::new(phone::MMS, "MMS"),
                        custom("Custom"),
                    ],
                ),
        )
        .with_kind(
            DataKind::new(mimetype::EMAIL, "Email")
                .with_icon(icons::EMAIL)
                .with_types(
                    columns::TYPE,
                    vec![
                        EditType::new(common::HOME, "Home"),
                        EditType::new(common::WORK, "Work"),
                        EditType::new(common::OTHER, "Other"),
                        EditType::new(types::email::MOBILE, "Mobile"),
                        custom("Custom"),
                    ],
                ),
        )
        .with_kind(
            DataKind::new(mimetype::STRUCTURED_POSTAL, "Address")
                .with_icon(icons::MAP)
                .with_types(
                    columns::TYPE,
                    vec![
                        EditType::new(common::HOME, "Home"),
                        EditType::new(common::WORK, "Work"),
                        EditType::new(common::OTHER, "Other"),
                        custom("Custom"),
                    ],
                ),
        )
        .with_kind(
            DataKind::new(mimetype::IM, "IM")
                .with_icon(icons::TALK)
                .with_types(
                    columns::TYPE,
                    vec![
                        EditType::new(common::HOME, "Home"),
                        EditType::new(common::WORK, "Work"),
                        EditType::new(common::OTHER, "Other"),
                        custom("Custom"),
                    ],
                ),
        )
        .with_kind(DataKind::new(mimetype::ORGANIZATION, "Organization").with_types(
            columns::TYPE,
            vec![
                EditType::new(organization::WORK, "Work"),
                EditType::new(organization::OTHER, "Other"),
                custom("Custom"),
            ],
        ))
        .with_kind(DataKind::new(mimetype::NICKNAME, "Nickname"))
        .with_kind(DataKind::new(mimetype::NOTE, "Notes"))
        .with_kind(DataKind::new(mimetype::WEBSITE, "Website").with_icon(icons::WEB))
        .with_kind(DataKind::new(mimetype::SIP_ADDRESS, "Internet call").with_icon(icons::CALL))
        .with_kind(DataKind::new(mimetype::EVENT, "Event").with_types(
            columns::TYPE,
            vec![
                EditType::new(event::BIRTHDAY, "Birthday"),
                EditType::new(event::ANNIVERSARY, "Anniversary"),
                EditType::new(event::OTHER, "Other"),
                custom("Custom"),
            ],
        ))
        .with_kind(DataKind::new(mimetype::RELATION, "Relationship").with_types(
            columns::TYPE,
            vec![
                EditType::new(relation::ASSISTANT, "Assistant"),
                EditType::new(relation::BROTHER, "Brother"),
                EditType::new(relation::CHILD, "Child"),
                EditType::new(relation::DOMESTIC_PARTNER, "Domestic Partner"),
                EditType::new(relation::FATHER, "Father"),
                EditType::new(relation::FRIEND, "Friend"),
                EditType::new(relation::MANAGER, "Manager"),
                EditType::new(relation::MOTHER, "Mother"),
                EditType::new(relation::PARENT, "Parent"),
                EditType::new(relation::PARTNER, "Partner"),
                EditType::new(relation::REFERRED_BY, "Referred by"),
                EditType::new(relation::RELATIVE, "Relative"),
                EditType::new(relation::SISTER, "Sister"),
                EditType::new(relation::SPOUSE, "Spouse"),
                custom("Custom"),
            ],
        ))
        .with_kind(DataKind::new(mimetype::GROUP_MEMBERSHIP, "Groups"))
}
