use log::trace;

/// Move-To-Front list over all 256 byte values. Starts in identity order and is owned by a single
/// encode or decode pass.
#[derive(Debug, Clone)]
pub struct MtfList {
    index: [u8; 256],
}

impl MtfList {
    pub fn new() -> Self {
        Self {
            index: std::array::from_fn(|i| i as u8),
        }
    }

    /// Returns the current position of `byte` and moves it to the front.
    pub fn encode_symbol(&mut self, byte: u8) -> u8 {
        // Every byte value is always somewhere in the list
        let idx = self
            .index
            .iter()
            .position(|&c| c == byte)
            .unwrap_or_default();
        self.promote(idx);
        idx as u8
    }

    /// Returns the byte at position `idx` and moves it to the front.
    pub fn decode_symbol(&mut self, idx: u8) -> u8 {
        let byte = self.index[idx as usize];
        self.promote(idx as usize);
        byte
    }

    /// Move the symbol at `idx` to the front, shifting everything ahead of it back one place.
    fn promote(&mut self, idx: usize) {
        if idx > 0 {
            let sym = self.index[idx];
            self.index.copy_within(..idx, 1);
            self.index[0] = sym;
        }
    }

    /// Current order of the list, front first.
    pub fn as_slice(&self) -> &[u8] {
        &self.index
    }
}

impl Default for MtfList {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode data using the Move To Front transform.
pub fn mtf_encode(data: &[u8]) -> Vec<u8> {
    let mut list = MtfList::new();
    let out = data
        .iter()
        .map(|&byte| list.encode_symbol(byte))
        .collect::<Vec<u8>>();
    trace!("MTF encoded {} bytes.", out.len());
    out
}

/// Decode Move To Front indecies back to the symbols they stand for.
pub fn mtf_decode(data: &[u8]) -> Vec<u8> {
    let mut list = MtfList::new();
    let out = data
        .iter()
        .map(|&idx| list.decode_symbol(idx))
        .collect::<Vec<u8>>();
    trace!("MTF decoded {} bytes.", out.len());
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn abracadabra_bwt_test() {
        let bwt = b"ARD!RCAAAABB";
        let encoded = mtf_encode(bwt);
        assert_eq!(encoded, vec![65, 82, 69, 36, 2, 69, 4, 0, 0, 0, 69, 0]);
        assert_eq!(mtf_decode(&encoded), bwt);
    }

    #[test]
    fn banana_test() {
        // a-z mapped to 0-25
        assert_eq!(mtf_decode(&[1, 1, 13, 1, 1, 1]), [1, 0, 13, 0, 13, 0]);
        assert_eq!(mtf_encode(&[1, 0, 13, 0, 13, 0]), [1, 1, 13, 1, 1, 1]);
    }

    #[test]
    fn empty_test() {
        assert!(mtf_encode(&[]).is_empty());
        assert!(mtf_decode(&[]).is_empty());
    }

    #[test]
    fn identical_test() {
        let data = [200_u8; 50];
        let encoded = mtf_encode(&data);
        assert_eq!(encoded[0], 200);
        assert!(encoded[1..].iter().all(|&x| x == 0));
        assert_eq!(mtf_decode(&encoded), data);
    }

    #[test]
    fn input_255_test() {
        assert_eq!(mtf_decode(&[255]), [255]);
        assert_eq!(mtf_encode(&[255]), [255]);
    }

    #[test]
    fn list_order_test() {
        let mut list = MtfList::new();
        assert_eq!(list.encode_symbol(3), 3);
        assert_eq!(&list.as_slice()[..5], &[3, 0, 1, 2, 4]);
        assert_eq!(list.decode_symbol(2), 1);
        assert_eq!(&list.as_slice()[..5], &[1, 3, 0, 2, 4]);
        assert_eq!(list.decode_symbol(0), 1);
        assert_eq!(&list.as_slice()[..5], &[1, 3, 0, 2, 4]);

        let mut sorted = list.as_slice().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..=255).collect::<Vec<u8>>());
    }

    #[test]
    fn random_round_trip_test() {
        let mut rng = StdRng::seed_from_u64(1234);
        for size in [1, 10, 256, 4096] {
            let data: Vec<u8> = (0..size).map(|_| rng.gen()).collect();
            assert_eq!(mtf_decode(&mtf_encode(&data)), data);
        }
    }
}
