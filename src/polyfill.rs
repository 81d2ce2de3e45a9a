#![allow(unused_imports)]

#[macro_use]
mod definitions {
    use cfg_if::cfg_if;

    cfg_if! {
        if #[cfg(feature = "error_in_core")] {
            pub use core::error::Error;
        } else if #[cfg(feature = "std")] {
            pub use std::error::Error;
        }
    }

    cfg_if! {
        if #[cfg(feature = "log")] {
            macro_rules! trace {
                ($($arg:tt)+) => { log::trace!(target: "siftheap", $($arg)+) };
            }
        } else {
            macro_rules! trace {
                ($($arg:tt)+) => {{
                    if false {
                        let _ = format_args!($($arg)+);
                    }
                }};
            }
        }
    }
}

#[cfg(any(feature = "std", feature = "error_in_core"))]
pub(crate) use definitions::Error;
