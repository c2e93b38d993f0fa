#![no_main]

use hufftree::build_tree;
use hufftree::find_prefix_violation;
use hufftree::Leaf;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // every byte is the weight of one symbol, long zero runs would exceed 64 bit codes
    let leaves: Vec<Leaf<usize>> = data
        .iter()
        .take(64)
        .enumerate()
        .map(|(symbol, weight)| Leaf::new(symbol, *weight as u64))
        .collect();
    let tree = match build_tree(leaves) {
        Some(tree) => tree,
        None => return,
    };
    let codes: Vec<_> = tree
        .code_table()
        .unwrap()
        .into_iter()
        .map(|(_, code)| code)
        .collect();
    assert_eq!(find_prefix_violation(&codes), None);
    assert_eq!(tree.node(tree.root()).unwrap().weight(), data.iter().take(64).map(|w| *w as u64).sum::<u64>());
});
