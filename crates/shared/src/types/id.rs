//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing an `AccountId` where a
//! `BillId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

typed_id!(AccountId, "Unique identifier for a ledger account.");
typed_id!(AccountGroupId, "Unique identifier for an account grouping.");
typed_id!(PartyId, "Unique identifier for a party (customer/vendor/staff).");
typed_id!(BankTransactionId, "Unique identifier for a bank transaction.");
typed_id!(SalesInvoiceId, "Unique identifier for a sales invoice.");
typed_id!(SalesPaymentId, "Unique identifier for a sales payment.");
typed_id!(ExpenseId, "Unique identifier for an expense.");
typed_id!(BillId, "Unique identifier for a vendor bill.");
typed_id!(CheckId, "Unique identifier for a check.");
typed_id!(JournalEntryId, "Unique identifier for a journal entry.");
typed_id!(JournalEntryLineId, "Unique identifier for a journal entry line.");
typed_id!(
    ReconcileStatementId,
    "Unique identifier for a reconciliation statement."
);
typed_id!(
    ReconcileTransactionId,
    "Unique identifier for a reconciliation transaction line."
);
typed_id!(ReconciliationId, "Unique identifier for a reconciliation.");
typed_id!(DocumentId, "Generic identifier for any financial document.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_roundtrip() {
        let id = AccountId::new();
        let parsed = AccountId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_typed_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = BillId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
        assert_eq!(Uuid::from(id), uuid);
    }

    #[test]
    fn test_typed_id_is_time_ordered() {
        // UUID v7 embeds a timestamp, so consecutive IDs sort ascending.
        let first = ReconcileStatementId::new();
        let second = ReconcileStatementId::new();
        assert!(first.into_inner() <= second.into_inner());
    }

    #[test]
    fn test_typed_id_parse_rejects_garbage() {
        assert!(AccountId::from_str("not-a-uuid").is_err());
    }
}
