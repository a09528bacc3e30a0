//! Search constants that can be overridden at runtime when built with the `tune` feature.
//!
//! Without the feature every tunable is a `const fn`, so the values fold into the table builders.
//! With it, each tunable is an atomic that `set_tunable` writes; overrides only take effect for
//! tables built afterwards, so they have to be applied before bootstrap.

macro_rules! init_tunables {
    ($($name:ident: $t:ty = $val:expr, $min:expr, $max:expr;)*) => {
        pub mod tunables {
            #[cfg(feature = "tune")]
            mod storage {
                use std::sync::atomic::AtomicI32;
                $(
                    #[allow(non_upper_case_globals)]
                    pub static $name: AtomicI32 = AtomicI32::new($val as i32);
                )*
            }

            $(
                #[cfg(not(feature = "tune"))]
                #[inline]
                pub const fn $name() -> $t {
                    $val
                }

                #[cfg(feature = "tune")]
                #[inline]
                pub fn $name() -> $t {
                    use std::sync::atomic::Ordering;
                    storage::$name.load(Ordering::Relaxed) as $t
                }
            )*

            /// Overrides a tunable by name, rejecting unknown names and out of range values
            #[cfg(feature = "tune")]
            pub fn set_tunable(tunable_name: &str, val: &str) -> Result<(), String> {
                use std::sync::atomic::Ordering;
                match tunable_name {
                    $(stringify!($name) => {
                        let parsed: i32 = val
                            .parse()
                            .map_err(|_| format!("invalid value '{val}' for {tunable_name}"))?;
                        if !($min..=$max).contains(&parsed) {
                            return Err(format!("{tunable_name} must be in {}..={}", $min, $max));
                        }
                        storage::$name.store(parsed, Ordering::Relaxed);
                        Ok(())
                    },)*
                    _ => Err(format!("unknown tunable '{tunable_name}'")),
                }
            }

            /// One `option` line per tunable, in the order they are declared
            #[cfg(feature = "tune")]
            pub fn option_lines() -> Vec<String> {
                vec![$(
                    format!(
                        "option name {} type spin default {} min {} max {}",
                        stringify!($name),
                        $val,
                        $min,
                        $max,
                    ),
                )*]
            }
        }
    }
}

init_tunables! {
    // name: type = default, min, max;
    // Fractional constants are in 1/1024 units.

    // Late move reductions, non-improving curve
    lmr_base: i32 = -256, -2048, 2048;
    lmr_div: i32 = 2304, 1024, 4096;

    // Late move reductions, improving curve
    lmr_improving_base: i32 = 1024, -2048, 4096;
    lmr_improving_div: i32 = 2048, 1024, 4096;

    // Late move pruning, non-improving curve
    lmp_base: i32 = 1536, 0, 8192;
    lmp_mult: i32 = 512, 128, 2048;

    // Late move pruning, improving curve
    lmp_improving_base: i32 = 3072, 0, 8192;
    lmp_improving_mult: i32 = 1024, 128, 4096;

    // SEE pruning, quiet margin is per depth, noisy margin per depth squared
    see_quiet_margin: i32 = -80, -200, -10;
    see_noisy_margin: i32 = -30, -100, -5;
}

#[cfg(test)]
mod tests {
    use super::tunables;

    #[test]
    fn test_default_values() {
        assert_eq!(tunables::lmr_base(), -256);
        assert_eq!(tunables::lmr_div(), 2304);
        assert_eq!(tunables::lmp_improving_mult(), 1024);
        assert_eq!(tunables::see_quiet_margin(), -80);
    }

    #[cfg(feature = "tune")]
    #[test]
    fn test_set_tunable_rejects_bad_input() {
        assert!(tunables::set_tunable("no_such_tunable", "1").is_err());
        assert!(tunables::set_tunable("lmr_div", "abc").is_err());
        assert!(tunables::set_tunable("lmr_div", "1").is_err());
        assert_eq!(tunables::option_lines().len(), 10);
    }
}
