//! Fixed-size hash table with separate chaining and instrumented operations.
//!
//! Every insert and search reports what it cost (bucket collision, chain
//! hops, key comparisons) so the benchmark drivers can aggregate collision
//! statistics alongside wall-clock timing.

/// Fractional part of the golden ratio, the classic multiplier for
/// multiplicative hashing.
const MULT_A: f64 = 0.6180339887;

/// Keys are 9-digit non-negative integers; the signed type keeps the
/// negative-index corrections in the hash functions meaningful.
pub type Key = i32;

/// Hashing strategy applied by a table operation. The table itself stores
/// no strategy; callers pass the same function for every operation of one
/// logical experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashFn {
    Division,
    Multiplication,
    Folding,
}

impl HashFn {
    pub const ALL: [HashFn; 3] = [HashFn::Division, HashFn::Multiplication, HashFn::Folding];

    pub fn label(self) -> &'static str {
        match self {
            HashFn::Division => "H_DIV",
            HashFn::Multiplication => "H_MUL",
            HashFn::Folding => "H_FOLD",
        }
    }
}

impl std::fmt::Display for HashFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What a single insert cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertOutcome {
    /// 1 iff the target bucket already held at least one node.
    pub table_collision: u32,
    /// Chain hops walked to reach the append point (chain length before
    /// this insert when colliding, 0 otherwise).
    pub list_steps: u32,
}

/// What a single search observed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOutcome {
    pub found: bool,
    /// Key equality tests performed (one per visited node).
    pub comparisons: u32,
    /// Hops taken while continuing past a non-matching node. A one-node
    /// chain that matches costs 1 comparison and 0 steps.
    pub list_steps: u32,
}

#[derive(Debug)]
struct ChainNode {
    key: Key,
    next: Option<Box<ChainNode>>,
}

impl ChainNode {
    fn new(key: Key) -> Box<Self> {
        Box::new(Self { key, next: None })
    }
}

/// Bucket array of singly linked chains. `m` is fixed at construction and
/// every hash function maps into `[0, m)`. Chains grow at the tail, so
/// traversal order always equals insertion order.
#[derive(Debug)]
pub struct ChainedTable {
    buckets: Vec<Option<Box<ChainNode>>>,
}

impl ChainedTable {
    pub fn new(m: usize) -> Self {
        assert!(m > 0, "table size must be positive");
        let buckets = std::iter::repeat_with(|| None).take(m).collect();
        Self { buckets }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.buckets.len()
    }

    /// `key mod m`, corrected upward if the remainder comes out negative.
    #[inline]
    fn hash_division(&self, key: Key) -> usize {
        let m = self.buckets.len() as i32;
        let mut h = key % m;
        if h < 0 {
            h += m;
        }
        h as usize
    }

    /// Multiplicative hashing with A = frac(phi). The clamp order (negate,
    /// then subtract m once) is preserved exactly; with non-negative keys
    /// neither branch fires.
    #[inline]
    fn hash_multiplication(&self, key: Key) -> usize {
        let m = self.buckets.len() as i64;
        let product = MULT_A * f64::from(key);
        let int_part = product as i64;
        let fraction = product - int_part as f64;
        let mut h = (m as f64 * fraction) as i64;
        if h < 0 {
            h = -h;
        }
        if h >= m {
            h -= m;
        }
        h as usize
    }

    /// Sum of base-1000 digit blocks, then the division-style correction.
    #[inline]
    fn hash_folding(&self, key: Key) -> usize {
        let m = self.buckets.len() as i32;
        let mut remaining = key;
        let mut sum: i32 = 0;
        while remaining > 0 {
            sum += remaining % 1000;
            remaining /= 1000;
        }
        let mut h = sum % m;
        if h < 0 {
            h += m;
        }
        h as usize
    }

    /// Bucket index for `key` under `function`, always in `[0, m)`.
    #[inline]
    pub fn hash(&self, key: Key, function: HashFn) -> usize {
        match function {
            HashFn::Division => self.hash_division(key),
            HashFn::Multiplication => self.hash_multiplication(key),
            HashFn::Folding => self.hash_folding(key),
        }
    }

    /// Append `key` to its chain (FIFO; never prepend) and report the cost.
    pub fn insert(&mut self, key: Key, function: HashFn) -> InsertOutcome {
        let h = self.hash(key, function);
        let mut outcome = InsertOutcome::default();

        let mut link = &mut self.buckets[h];
        let mut steps = 0u32;
        while let Some(node) = link {
            steps += 1;
            link = &mut node.next;
        }
        if steps > 0 {
            outcome.table_collision = 1;
            outcome.list_steps = steps;
        }
        *link = Some(ChainNode::new(key));

        outcome
    }

    /// Walk the chain for `key`, counting comparisons and hops. Stops at
    /// the first match.
    pub fn search(&self, key: Key, function: HashFn) -> SearchOutcome {
        let h = self.hash(key, function);
        let mut outcome = SearchOutcome::default();

        let mut node = self.buckets[h].as_deref();
        while let Some(current) = node {
            outcome.comparisons += 1;
            if current.key == key {
                outcome.found = true;
                break;
            }
            if current.next.is_some() {
                outcome.list_steps += 1;
            }
            node = current.next.as_deref();
        }

        outcome
    }

    /// Number of nodes in the chain at `bucket`.
    pub fn chain_len(&self, bucket: usize) -> usize {
        let mut len = 0;
        let mut node = self.buckets[bucket].as_deref();
        while let Some(current) = node {
            len += 1;
            node = current.next.as_deref();
        }
        len
    }

    /// Total nodes across all chains.
    pub fn len(&self) -> usize {
        (0..self.buckets.len()).map(|b| self.chain_len(b)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|b| b.is_none())
    }

    /// Keys of one chain in traversal (= insertion) order.
    pub fn chain_keys(&self, bucket: usize) -> Vec<Key> {
        let mut keys = Vec::new();
        let mut node = self.buckets[bucket].as_deref();
        while let Some(current) = node {
            keys.push(current.key);
            node = current.next.as_deref();
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_stays_in_codomain() {
        let table = ChainedTable::new(1009);
        for key in [100_000_000, 123_456_789, 999_999_999, 0, 1, 1009] {
            for function in HashFn::ALL {
                let h = table.hash(key, function);
                assert!(h < 1009, "{function} put {key} at {h}");
            }
        }
    }

    #[test]
    fn folding_sums_digit_blocks() {
        // 123456789 -> 789 + 456 + 123 = 1368 -> 368 mod 1000
        let table = ChainedTable::new(1000);
        assert_eq!(table.hash(123_456_789, HashFn::Folding), 368);
    }

    #[test]
    fn division_collision_counting() {
        // 14, 21, 28 are all 0 mod 7.
        let mut table = ChainedTable::new(7);

        let first = table.insert(100_000_014, HashFn::Division);
        assert_eq!((first.table_collision, first.list_steps), (0, 0));

        let second = table.insert(100_000_021, HashFn::Division);
        assert_eq!((second.table_collision, second.list_steps), (1, 1));

        let third = table.insert(100_000_028, HashFn::Division);
        assert_eq!((third.table_collision, third.list_steps), (1, 2));

        let found = table.search(100_000_021, HashFn::Division);
        assert!(found.found);
        assert_eq!(found.comparisons, 2);
        assert_eq!(found.list_steps, 1);
    }

    #[test]
    fn chains_preserve_insertion_order() {
        let mut table = ChainedTable::new(7);
        let keys = [100_000_014, 100_000_021, 100_000_028, 100_000_014];
        for key in keys {
            table.insert(key, HashFn::Division);
        }
        assert_eq!(table.chain_keys(0), keys.to_vec());
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn duplicate_keys_are_ordinary_entries() {
        let mut table = ChainedTable::new(11);
        table.insert(100_000_001, HashFn::Division);
        let dup = table.insert(100_000_001, HashFn::Division);
        assert_eq!(dup.table_collision, 1);
        assert_eq!(table.len(), 2);

        let hit = table.search(100_000_001, HashFn::Division);
        assert!(hit.found);
        assert_eq!(hit.comparisons, 1);
        assert_eq!(hit.list_steps, 0);
    }

    #[test]
    fn miss_visits_whole_chain() {
        let mut table = ChainedTable::new(7);
        table.insert(100_000_014, HashFn::Division);
        table.insert(100_000_021, HashFn::Division);

        // 100000035 also lands in bucket 0 but is absent.
        let miss = table.search(100_000_035, HashFn::Division);
        assert!(!miss.found);
        assert_eq!(miss.comparisons, 2);
        assert_eq!(miss.list_steps, 1);

        // Empty bucket: nothing visited at all.
        let empty = table.search(100_000_015, HashFn::Division);
        assert!(!empty.found);
        assert_eq!(empty.comparisons, 0);
        assert_eq!(empty.list_steps, 0);
    }

    #[test]
    fn multiplication_follows_truncated_fraction_formula() {
        let table = ChainedTable::new(10007);
        for key in [100_000_000, 555_123_456, 999_999_999] {
            let product = MULT_A * f64::from(key);
            let fraction = product - (product as i64) as f64;
            let expected = (10007.0 * fraction) as i64 as usize;
            assert_eq!(table.hash(key, HashFn::Multiplication), expected);
        }
    }

    #[test]
    fn node_count_matches_inserts() {
        let mut table = ChainedTable::new(101);
        for i in 0..500 {
            table.insert(100_000_000 + i * 7919, HashFn::Folding);
        }
        assert_eq!(table.len(), 500);
    }
}
