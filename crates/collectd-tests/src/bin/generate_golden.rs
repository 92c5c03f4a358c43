//! Golden fixture generator for the collectd conformance tests.
//!
//! Rewrites every datagram under `tests/golden/`. Run it after changing
//! [`collectd_tests::cpu_disk_sample`] and commit the result; the
//! conformance suite checks the committed bytes against the builder.
//!
//! ```bash
//! cargo run --bin generate_golden -p collectd-tests
//! ```
//!
//! | File           | Contents                                          |
//! |----------------|---------------------------------------------------|
//! | cpu_disk.dat   | disk + cpu plugin flush, 26 value lists           |

use std::fs;
use std::path::PathBuf;

fn main() {
    let golden_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden");
    fs::create_dir_all(&golden_dir).expect("failed to create golden directory");

    let path = golden_dir.join("cpu_disk.dat");
    let bytes = collectd_tests::cpu_disk_sample();
    fs::write(&path, &bytes).expect("failed to write cpu_disk.dat");
    println!("wrote {} ({} bytes)", path.display(), bytes.len());
}
