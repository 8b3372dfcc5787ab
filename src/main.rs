use avl_collections::avl_tree::AvlMap;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::str::FromStr;

const NUM_OF_KEYS: u32 = 7;

fn main() {
    let level = env::var("AVL_LOG")
        .ok()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::Info);
    if TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).is_err() {
        eprintln!("Error: could not initialize logger.");
    }

    let mut map = AvlMap::with_capacity(NUM_OF_KEYS as usize);
    for key in 1..=NUM_OF_KEYS {
        map.insert(key, key * 10);
    }
    info!("inserted {} ascending keys, height {:?}", map.len(), map.height());
    print!("{}", map.render());

    let root = map.root_key().cloned();
    if let Some(root) = root {
        map.remove(&root);
        info!("removed root key {}, new root {:?}", root, map.root_key());
        print!("{}", map.render());
    }

    if let Err(error) = map.validate() {
        eprintln!("Error: {}", error);
    }
}
