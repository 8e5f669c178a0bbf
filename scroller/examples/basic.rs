use scroller::{BoundingRect, OffsetTable, page_scroll_state};

fn main() {
    // Heights as a measurement pass would resolve them.
    let table = OffsetTable::from_heights(
        (0..10_000).map(|i| if i % 7 == 0 { 48.0 } else { 24.0 }),
    );
    println!("total_height={}", table.total_height());

    // The list sits in a page that has scrolled 12_000px past the list's top edge.
    let state = page_scroll_state(
        BoundingRect {
            top: -12_000.0,
            height: table.total_height(),
        },
        800.0,
    );
    println!("scroll_state={state:?}");

    let first = table.index_at_offset(state.top);
    let last = table.index_at_offset(state.bottom);
    println!("visible items {first:?}..={last:?}");
    if let Some(first) = first {
        println!("first item starts at {}", table.accumulator(first));
    }
}
