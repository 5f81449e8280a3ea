//! This build script copies the `memory.x` file from the crate root into a directory where
//! the linker can always find it at build time, and records the build machine's clock so the
//! firmware boots with roughly the right time.

use std::{env, fs::File, io::Write, path::PathBuf};

use chrono::Local;

fn main() {
    // Put memory layout in the output directory and ensure it's on the linker search path.
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());

    // Create rs file with current UTC epoch and local UTC offset
    let now = Local::now();
    File::create(out.join("utc.rs"))
        .unwrap()
        .write_fmt(format_args!(
            "const UTC_EPOCH: i64 = {};\nconst UTC_OFFSET: i32 = {};\n",
            now.timestamp(),
            now.offset().local_minus_utc(),
        ))
        .unwrap();
}
