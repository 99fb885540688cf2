#![warn(missing_docs)]

//! This library wrappers num_format to format integer counts according to
//! the system locale. If a system locale is not available, en is used.

#[cfg(any(unix, windows))]
use lazy_static::lazy_static;
#[cfg(any(unix, windows))]
use num_format::SystemLocale;
use num_format::{Locale, ToFormattedString};

#[cfg(any(unix, windows))]
lazy_static! {
    static ref SYSTEM_LOCALE: Option<SystemLocale> = SystemLocale::default().ok();
}

/// Trait applied to integer types to add the num_format functions
pub trait NumFormat: Sized {
    /// Formats the number using the system locale, falling back to English
    fn num_format(&self) -> String;
    /// Formats the number using given locale
    fn num_format_with(&self, locale: &Locale) -> String;
}

macro_rules! gen_int_impl {
    ($type:ty) => {
        impl NumFormat for $type {
            fn num_format(&self) -> String {
                #[cfg(any(unix, windows))]
                match &*SYSTEM_LOCALE {
                    Some(locale) => self.to_formatted_string(locale),
                    None => self.to_formatted_string(&Locale::en),
                }

                #[cfg(not(any(unix, windows)))]
                self.to_formatted_string(&Locale::en)
            }

            fn num_format_with(&self, locale: &Locale) -> String {
                self.to_formatted_string(locale)
            }
        }
    };
}

gen_int_impl!(usize);
gen_int_impl!(u64);
gen_int_impl!(u32);
gen_int_impl!(u16);
gen_int_impl!(u8);

gen_int_impl!(isize);
gen_int_impl!(i64);
gen_int_impl!(i32);
gen_int_impl!(i16);
gen_int_impl!(i8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intcheck() {
        assert_eq!((-1000i16).num_format_with(&Locale::en), "-1,000");
        assert_eq!((-100i16).num_format_with(&Locale::en), "-100");
        assert_eq!((-10i16).num_format_with(&Locale::en), "-10");
        assert_eq!((-1i16).num_format_with(&Locale::en), "-1");
        assert_eq!(0u16.num_format_with(&Locale::en), "0");
        assert_eq!(1u16.num_format_with(&Locale::en), "1");
        assert_eq!(10u16.num_format_with(&Locale::en), "10");
        assert_eq!(100u16.num_format_with(&Locale::en), "100");
        assert_eq!(1000u16.num_format_with(&Locale::en), "1,000");
    }
}
