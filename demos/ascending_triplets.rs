// Example: count strictly ascending triples (i < j < k, a[i] < a[j] < a[k]) in O(n log n).
use fenwick::Tree;

fn count_ascending_triplets(seq: &[i64]) -> i64 {
    // Compress values to dense ranks 0..distinct.
    let mut sorted = seq.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let rank = |v: i64| sorted.partition_point(|&s| s < v) as i64;

    let top = sorted.len() as i64 - 1;
    // seen[r]: elements of rank r so far.
    // pairs[r]: ascending pairs ending in an element of rank r.
    // triples[r]: ascending triples ending in an element of rank r.
    let mut seen = Tree::new(0, top);
    let mut pairs = Tree::new(0, top);
    let mut triples = Tree::new(0, top);

    for &v in seq {
        let r = rank(v);
        triples.add(r, pairs.prefix(r - 1));
        pairs.add(r, seen.prefix(r - 1));
        seen.add(r, 1);
    }
    triples.total()
}

fn brute_force(seq: &[i64]) -> i64 {
    let n = seq.len();
    let mut count = 0;
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                if seq[i] < seq[j] && seq[j] < seq[k] {
                    count += 1;
                }
            }
        }
    }
    count
}

fn main() {
    let seq = [5, 1, 4, 2, 6, 3, 8, 3, -2, 7, 9];
    let fast = count_ascending_triplets(&seq);
    let slow = brute_force(&seq);
    println!("sequence={seq:?}");
    println!("ascending_triplets={fast} brute_force={slow}");
    assert_eq!(fast, slow);
}
