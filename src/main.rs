// Small demo of lists, cursors and sequence pipelines. Set RUST_LOG=debug to
// see cursor and source diagnostics.

use primseq::Result;
use primseq::list::LongList;
use primseq::sequence::Sequence;
use primseq::sequence::once;
use primseq::sequence::range;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut list: LongList = range(1, 12).to_list();
    info!(len = list.len(), capacity = list.capacity(), "built list");

    println!("list:        {}", list);
    println!("windows:     {}", (&list).window(3, 2).join(" "));
    println!("batches:     {}", (&list).batch(5).join(" "));
    println!("runs:        {}", (&list).filter(|x| x % 4 != 0).batch_by(|a, b| b - a > 1).join(" "));
    println!("deltas:      {}", (&list).map(|x| x * x).map_back(0, |p, c| c - p).join(", "));

    match remove_multiples(&mut list, 3) {
        Ok(removed) => println!("no threes:   {} ({} removed)", list, removed),
        Err(err) => eprintln!("cursor failed: {}", err),
    }

    // A stale cursor is reported rather than reading shifted data
    if let Ok(mut stale) = list.cursor(0) {
        list.push(100);
        if let Err(err) = stale.next(&list) {
            println!("stale:       {}", err);
        }
    }

    let single = once(vec![7i64, 8, 9]);
    println!("one-shot:    {} then {}", single.count(), single.count());
}

/// Drop every multiple of `factor` through a cursor, returning how many went.
fn remove_multiples(list: &mut LongList, factor: i64) -> Result<usize> {
    let mut cursor = list.cursor_mut(0)?;
    let mut removed = 0;
    while cursor.has_next() {
        if cursor.next()? % factor == 0 {
            cursor.remove()?;
            removed += 1;
        }
    }
    return Ok(removed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_every_multiple() {
        let mut list = LongList::of(&[3, 1, 6, 6, 2, 9]);
        assert_eq!(remove_multiples(&mut list, 3), Ok(4));
        assert_eq!(list.to_vec(), vec![1, 2]);
        assert_eq!(remove_multiples(&mut LongList::new(), 3), Ok(0));
    }
}
