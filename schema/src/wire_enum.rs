//! String conversions shared by the unit-like enums carried as wire strings.
//!
//! Each enum provides `ALL` and `as_str`; the macro derives parsing
//! (trimmed, case-insensitive), the serde `String` bridges, and `Display`.

#[cfg(test)]
#[path = "wire_enum_test.rs"]
mod wire_enum_test;

macro_rules! wire_enum_conversions {
    ($ty:ident, $what:literal) => {
        impl ::std::str::FromStr for $ty {
            type Err = String;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let wanted = raw.trim().to_ascii_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| format!("unknown {}: {raw}", $what))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = String;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                raw.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_owned()
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
