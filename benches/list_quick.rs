// Quick single-run timings for development iteration

use std::time::Instant;

use primseq::list::ArrayList;
use primseq::list::ChainedList;
use primseq::list::IntList;
use primseq::list::PrimitiveList;
use primseq::sequence::Sequence;
use primseq::set::IntSet;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

const SIZE: usize = 1000;
const ITERATIONS: usize = 200;

fn time_ops<F: Fn() -> usize>(f: F, iterations: usize) -> f64 {
    // Warmup
    for _ in 0..3 {
        let _ = f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = f();
    }
    let elapsed = start.elapsed();
    return elapsed.as_nanos() as f64 / iterations as f64;
}

fn report(name: &str, nanos: f64) {
    println!("  {:<24} {:>12.1} us", name, nanos / 1000.0);
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let values: Vec<i32> = (0..SIZE).map(|_| rng.gen_range(0..SIZE as i32)).collect();
    let list = ArrayList::of(&values);

    println!("{} elements, {} iterations each\n", SIZE, ITERATIONS);

    println!("=== lists ===");
    report("push", time_ops(|| {
        let mut list = IntList::new();
        for x in &values {
            list.push(*x);
        }
        list.len()
    }, ITERATIONS));

    report("random insert", time_ops(|| {
        let mut rng = StdRng::seed_from_u64(7);
        let mut list = IntList::new();
        for x in &values {
            let index = rng.gen_range(0..=list.len());
            let _ = list.insert_at(index, *x);
        }
        list.len()
    }, ITERATIONS));

    report("cursor remove", time_ops(|| {
        let mut list = list.clone();
        if let Ok(mut cursor) = list.cursor_mut(0) {
            while let Ok(x) = cursor.next() {
                if x % 2 == 0 {
                    let _ = cursor.remove();
                }
            }
        }
        list.len()
    }, ITERATIONS));

    report("chained insert", time_ops(|| {
        let (mut a, mut b) = (list.clone(), list.clone());
        let mut chained = ChainedList::new(vec![&mut a, &mut b]);
        for i in 0..100 {
            let _ = chained.insert_at(i * 10, i as i32);
        }
        chained.len()
    }, ITERATIONS));

    println!("\n=== sets ===");
    report("add", time_ops(|| {
        let mut set = IntSet::new();
        for x in &values {
            set.add(*x);
        }
        set.len()
    }, ITERATIONS));

    println!("\n=== sequences ===");
    report("filter/map/count", time_ops(|| {
        (&list).filter(|x| x % 3 == 0).map(|x| x * 2).count()
    }, ITERATIONS));

    report("window(8, 1)", time_ops(|| (&list).window(8, 1).count(), ITERATIONS));

    report("batch_by ascending", time_ops(|| {
        (&list).batch_by(|a, b| b < a).count()
    }, ITERATIONS));

    report("distinct", time_ops(|| (&list).distinct().count(), ITERATIONS));

    report("sorted", time_ops(|| (&list).sorted().count(), ITERATIONS));
}
