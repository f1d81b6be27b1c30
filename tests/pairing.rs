use pqueue::Pairing;

fn lcg_next(state: &mut u32) -> u32 {
    *state = state.wrapping_mul(1103515245).wrapping_add(12345);
    *state & 0x7fff_ffff
}

fn pop_all_sorted(heap: &Pairing<i32, i32>) -> Vec<(i32, i32)> {
    let mut result = Vec::new();
    while let Some(item) = heap.pop() {
        result.push(item);
    }
    result
}

fn is_non_decreasing(items: &[(i32, i32)]) -> bool {
    items.windows(2).all(|w| w[0].0 <= w[1].0)
}

#[test]
fn pairing_drain_seed_case() {
    let heap = Pairing::new();
    for k in [5, 3, 8, 1, 4, 9, 2, 7, 6] {
        heap.push(k, k);
    }
    let result = pop_all_sorted(&heap);
    let keys = result.into_iter().map(|(k, _)| k).collect::<Vec<_>>();
    assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn random_push_then_pop_all() {
    const RAND_N: usize = 5000;
    let heap = Pairing::new();
    let mut rng = 11u32;
    let mut expected = Vec::with_capacity(RAND_N);
    for _ in 0..RAND_N {
        let k = (lcg_next(&mut rng) % 1_000_000) as i32;
        heap.push(k, k);
        expected.push(k);
    }
    expected.sort();
    let result = pop_all_sorted(&heap);
    assert!(is_non_decreasing(&result));
    let keys = result.into_iter().map(|(k, _)| k).collect::<Vec<_>>();
    assert_eq!(keys, expected);
}

#[test]
fn meld_conserves_contents_and_empties_source() {
    let a = Pairing::new();
    let b = Pairing::new();
    for k in [4, 10, 2] {
        a.push(k, k);
    }
    for k in [7, 1, 5] {
        b.push(k, k);
    }
    a.meld(&b);
    assert!(b.is_empty());
    assert_eq!(a.len(), 6);
    let result = pop_all_sorted(&a);
    let keys = result.into_iter().map(|(k, _)| k).collect::<Vec<_>>();
    assert_eq!(keys, vec![1, 2, 4, 5, 7, 10]);
}

#[test]
fn repeated_meld_chain_preserves_all_elements() {
    let main = Pairing::new();
    let mut total = 0;
    for group in 0..20 {
        let side = Pairing::new();
        for k in 0..10 {
            side.push(group * 10 + k, ());
            total += 1;
        }
        main.meld(&side);
        assert!(side.is_empty());
    }
    assert_eq!(main.len(), total);
    let mut keys = Vec::new();
    while let Some((k, _)) = main.pop() {
        keys.push(k);
    }
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(keys.len(), total);
}

#[test]
fn empty_heap_peek_and_pop() {
    let heap = Pairing::<i32, i32>::new();
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
}
