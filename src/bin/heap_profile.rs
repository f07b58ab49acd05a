use std::path::PathBuf;

use frame_bench::bench::runner;

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/test_data_10000.csv"));

    let frame = runner::load_frame(&path).unwrap();
    let _sorted = runner::sort_frame(&frame).unwrap();
    let _filtered = runner::filter_frame(&frame).unwrap();
    let _grouped = runner::group_frame(&frame).unwrap();

    println!("Memory benchmark finished. See dhat-heap.json for details");
}
