//! XOR stream cipher used by encrypted containers.
//!
//! Encrypted containers are XORed byte by byte with the low 8 bits of successive outputs
//! of an MT19937 generator seeded with [`KEY_SEED`]. Decryption and encryption are the same
//! operation.

/// Seed of the key stream generator.
pub const KEY_SEED: u32 = 0x5D3E3;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// MT19937 with the original (1997) `sgenrand` seeding.
pub struct MersenneTwister {
    state: [u32; N],
    index: usize,
}

impl MersenneTwister {
    /// Seed a new generator.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut state = [0_u32; N];
        let mut seed = seed;
        for slot in &mut state {
            *slot = seed & 0xffff_0000;
            seed = seed.wrapping_mul(69069).wrapping_add(1);
            *slot |= (seed & 0xffff_0000) >> 16;
            seed = seed.wrapping_mul(69069).wrapping_add(1);
        }

        MersenneTwister { state, index: N }
    }

    fn twist(&mut self) {
        let mag01 = [0, MATRIX_A];
        for kk in 0..N {
            let y = (self.state[kk] & UPPER_MASK) | (self.state[(kk + 1) % N] & LOWER_MASK);
            self.state[kk] = self.state[(kk + M) % N] ^ (y >> 1) ^ mag01[(y & 1) as usize];
        }
        self.index = 0;
    }

    /// Next tempered 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }

        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }
}

/// XOR `data` in place with the container key stream.
pub fn xor_crypt(data: &mut [u8]) {
    let mut rng = MersenneTwister::new(KEY_SEED);
    for byte in data {
        *byte ^= (rng.next_u32() & 0xff) as u8;
    }
}

/// Returns `true` when the first 8 bytes of `data` decrypt to a `VERS` section header.
///
/// The version field of a real container is small, so its three high bytes must come out
/// as zero.
#[must_use]
pub fn is_encrypted(data: &[u8]) -> bool {
    let Some(head) = data.get(..8) else {
        return false;
    };

    let mut magic = [0_u8; 8];
    magic.copy_from_slice(head);
    xor_crypt(&mut magic);

    &magic[..4] == b"VERS" && magic[5..8] == [0, 0, 0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crypt_is_involution() {
        let plain = b"VERS\x0e\x00\x00\x00CODE".to_vec();
        let mut data = plain.clone();

        xor_crypt(&mut data);
        assert_ne!(data, plain);
        assert!(is_encrypted(&data));

        xor_crypt(&mut data);
        assert_eq!(data, plain);
        assert!(!is_encrypted(&data));
    }

    #[test]
    fn short_input_is_not_encrypted() {
        assert!(!is_encrypted(b"VERS"));
    }

    #[test]
    fn generator_is_deterministic() {
        let mut a = MersenneTwister::new(KEY_SEED);
        let mut b = MersenneTwister::new(KEY_SEED);
        for _ in 0..(N * 2) {
            assert_eq!(a.next_u32(), b.next_u32());
        }

        let mut c = MersenneTwister::new(KEY_SEED + 1);
        let mut a = MersenneTwister::new(KEY_SEED);
        assert!((0..8).any(|_| a.next_u32() != c.next_u32()));
    }
}
