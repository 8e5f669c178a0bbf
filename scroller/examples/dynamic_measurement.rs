use scroller::{HeightCache, HeightIndex, HeightInputs, ItemFields};

#[derive(Debug)]
struct Row {
    id: u32,
    pinned_height: Option<f64>,
}

fn main() {
    let rows: Vec<Row> = (0..100)
        .map(|id| Row {
            id,
            pinned_height: (id == 0).then_some(64.0),
        })
        .collect();
    let fields = ItemFields::new(|r: &Row| r.id).with_height(|r: &Row| r.pinned_height);
    let mut cache = HeightCache::new();
    let mut index = HeightIndex::new();

    let refresh = |index: &mut HeightIndex, cache: &HeightCache<u32>| {
        index.refresh(HeightInputs {
            items: &rows,
            items_version: 0,
            fields: &fields,
            cache,
            item_height: None,
            min_item_height: Some(32.0),
        })
    };

    refresh(&mut index, &cache);
    println!("estimated: item 10 starts at {}", index.accumulator(10));

    // A resize observer reports real heights for the first rows.
    cache.extend((1..10).map(|id| (id, 40.0)));
    let rebuilt = refresh(&mut index, &cache);
    println!(
        "rebuilt={rebuilt}: item 10 starts at {}, total={}",
        index.accumulator(10),
        index.total_height()
    );

    // Nothing changed: the memoized table is kept.
    println!("rebuilt again={}", refresh(&mut index, &cache));
}
