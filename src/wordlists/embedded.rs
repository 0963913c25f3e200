//! Embedded dictionary
//!
//! Compiled into the binary at build time from `data/words.txt`.

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
