//! Resolve lookup keys for paths given on the command line
//!
//! ```text
//! cargo run --example resolve_paths -- exd/root.exl ui/uld/title_logo.uld
//! ```

use sqpath_keys::PathKey;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let paths: Vec<String> = if args.is_empty() {
        ["exd/root.exl", "bg/ex2/03/fld/f1f3/level/planmap.lgb"]
            .iter()
            .map(ToString::to_string)
            .collect()
    } else {
        args
    };

    for path in &paths {
        match PathKey::compute(path) {
            Ok(key) => println!("{key}  {path}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }
}
