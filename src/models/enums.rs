use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

// Stored strings are the exact values the dashboard queries filter on
// (e.g. `WHERE a.status = 'Completed'`), so the hyphenated/spaced forms
// are part of the schema contract.

str_enum!(Gender {
    Male => "Male",
    Female => "Female",
});

str_enum!(ServiceType {
    Consultation => "Consultation",
    Diagnostic => "Diagnostic",
    Treatment => "Treatment",
    Surgery => "Surgery",
    CheckUp => "Check-up",
});

str_enum!(AppointmentStatus {
    Completed => "Completed",
    NoShow => "No-show",
    Cancelled => "Cancelled",
});

str_enum!(PaymentStatus {
    Paid => "Paid",
    Pending => "Pending",
    Overdue => "Overdue",
});

str_enum!(PaymentMethod {
    Cash => "Cash",
    Card => "Card",
    BankTransfer => "Bank Transfer",
    Insurance => "Insurance",
});
