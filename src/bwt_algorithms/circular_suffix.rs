use std::cmp::Ordering;

use log::{debug, trace};

use crate::error::{Error, Result};

/// Ranges at or below this size are finished with an insertion sort.
const CUTOFF: usize = 16;

/// Sorted order of all cyclic rotations of a block of data.
///
/// `index(i)` is the offset in the original data where the i-th smallest rotation starts.
/// Rotations that are identical strings (only possible when the data is periodic) compare equal
/// and their relative order is whatever the sort left them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularSuffixArray {
    index: Vec<u32>,
}

#[allow(clippy::len_without_is_empty)]
impl CircularSuffixArray {
    /// Rank every rotation of `data`. Fails on empty input, or if the block is too big for u32 offsets.
    pub fn new(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        if u32::try_from(data.len()).is_err() {
            return Err(Error::BlockTooLarge(data.len()));
        }

        let mut sorter = RotationSorter::new(data);
        sorter.sort();
        debug!("Ranked {} rotations.", data.len());

        Ok(Self {
            index: sorter.index,
        })
    }

    /// Length of the data the array was built from.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Offset of the i-th smallest rotation.
    pub fn index(&self, i: usize) -> Result<usize> {
        self.index
            .get(i)
            .map(|&offset| offset as usize)
            .ok_or(Error::OutOfRange {
                index: i,
                len: self.index.len(),
            })
    }

    /// Rank of the rotation that starts at `offset`, if `offset` is inside the data.
    pub fn rank_of(&self, offset: usize) -> Option<usize> {
        self.index.iter().position(|&o| o as usize == offset)
    }

    /// The whole permutation, smallest rotation first.
    pub fn as_slice(&self) -> &[u32] {
        &self.index
    }
}

/// Owns the offset buffer while the rotations are being sorted.
struct RotationSorter<'a> {
    data: &'a [u8],
    index: Vec<u32>,
}

impl<'a> RotationSorter<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            index: (0..data.len() as u32).collect(),
        }
    }

    /// Symbol at depth `d` of the rotation starting at `offset`.
    #[inline(always)]
    fn sym(&self, offset: u32, d: usize) -> u8 {
        self.data[(offset as usize + d) % self.data.len()]
    }

    /// Three-way radix quicksort. Ranges are half open, [lo, hi), and d is the depth of the
    /// symbol used as the key. Uses a work stack since the middle partition of highly repetitive
    /// data can go as deep as the block is long.
    fn sort(&mut self) {
        let end = self.data.len();
        let mut stack: Vec<(usize, usize, usize)> = vec![(0, end, 0)];

        while let Some((lo, hi, d)) = stack.pop() {
            // Single elements are done, and once d reaches the end every symbol has matched.
            if hi - lo < 2 || d >= end {
                continue;
            }
            if hi - lo <= CUTOFF {
                self.insertion(lo, hi, d);
                continue;
            }

            let pivot = self.sym(self.index[lo], d);
            let mut lt = lo;
            let mut gt = hi;
            let mut i = lo + 1;
            while i < gt {
                match self.sym(self.index[i], d).cmp(&pivot) {
                    Ordering::Less => {
                        self.index.swap(lt, i);
                        lt += 1;
                        i += 1;
                    }
                    Ordering::Greater => {
                        gt -= 1;
                        self.index.swap(i, gt);
                    }
                    Ordering::Equal => i += 1,
                }
            }
            trace!("Partitioned [{}, {}) at depth {}: [{}, {}) equal", lo, hi, d, lt, gt);

            // index[lo..lt] < pivot == index[lt..gt] < index[gt..hi]
            stack.push((lo, lt, d));
            stack.push((gt, hi, d));
            stack.push((lt, gt, d + 1));
        }
    }

    /// Finish a small range, comparing full rotations from depth d.
    fn insertion(&mut self, lo: usize, hi: usize, d: usize) {
        for i in lo + 1..hi {
            let mut j = i;
            while j > lo && self.less(self.index[j], self.index[j - 1], d) {
                self.index.swap(j, j - 1);
                j -= 1;
            }
        }
    }

    /// Is the rotation at `a` strictly smaller than the one at `b`, looking from depth d?
    fn less(&self, a: u32, b: u32, d: usize) -> bool {
        for k in d..self.data.len() {
            match self.sym(a, k).cmp(&self.sym(b, k)) {
                Ordering::Less => return true,
                Ordering::Greater => return false,
                Ordering::Equal => {}
            }
        }
        false
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// Full cyclic comparison, used to check the sort independently of the sorter.
    fn rotation_cmp(data: &[u8], a: usize, b: usize) -> Ordering {
        let n = data.len();
        (0..n)
            .map(|k| data[(a + k) % n].cmp(&data[(b + k) % n]))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    fn assert_valid(data: &[u8]) {
        let csa = CircularSuffixArray::new(data).unwrap();
        assert_eq!(csa.len(), data.len());

        let mut seen = vec![false; data.len()];
        for &o in csa.as_slice() {
            assert!(!seen[o as usize], "offset {} ranked twice", o);
            seen[o as usize] = true;
        }

        for w in csa.as_slice().windows(2) {
            assert_ne!(
                rotation_cmp(data, w[0] as usize, w[1] as usize),
                Ordering::Greater,
                "rotations {} and {} out of order",
                w[0],
                w[1]
            );
        }
    }

    #[test]
    fn abracadabra_test() {
        let csa = CircularSuffixArray::new(b"ABRACADABRA!").unwrap();
        assert_eq!(csa.as_slice(), &[11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
        assert_eq!(csa.index(3).unwrap(), 0);
        assert_eq!(csa.rank_of(0), Some(3));
    }

    #[test]
    fn single_byte_test() {
        let csa = CircularSuffixArray::new(b"z").unwrap();
        assert_eq!(csa.as_slice(), &[0]);
    }

    #[test]
    fn empty_test() {
        assert!(matches!(
            CircularSuffixArray::new(b""),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn out_of_range_test() {
        let csa = CircularSuffixArray::new(b"banana").unwrap();
        assert!(csa.index(5).is_ok());
        assert!(matches!(
            csa.index(6),
            Err(Error::OutOfRange { index: 6, len: 6 })
        ));
        assert_eq!(csa.rank_of(6), None);
    }

    #[test]
    fn past_cutoff_test() {
        let text = b"If Peter Piper picked a peck of pickled peppers, where's the peck of pickled peppers Peter Piper picked?????";
        assert_valid(text);
    }

    #[test]
    fn identical_symbols_test() {
        assert_valid(&[b'a'; 300]);
    }

    #[test]
    fn periodic_test() {
        // Every rotation has a twin, so ties are everywhere
        let data: Vec<u8> = b"abcab".iter().cycle().take(200).copied().collect();
        assert_valid(&data);
    }

    #[test]
    fn random_test() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [2, 15, 16, 17, 33, 100, 1000] {
            let wide: Vec<u8> = (0..size).map(|_| rng.gen()).collect();
            assert_valid(&wide);
            let narrow: Vec<u8> = (0..size).map(|_| rng.gen_range(b'a'..=b'c')).collect();
            assert_valid(&narrow);
        }
    }
}
