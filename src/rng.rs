#[derive(Clone, Debug)]
pub struct Rng {
    initial_seed: u32,
    seed: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        Self {
            initial_seed: seed,
            seed,
        }
    }

    /// Seeds from the OS-backed thread rng. Read the seed back with
    /// [`Rng::initial_seed`] to replay the same night.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u32>())
    }

    pub fn initial_seed(&self) -> u32 {
        self.initial_seed
    }

    pub fn next_f32(&mut self) -> f32 {
        self.seed = self.seed.wrapping_add(0x6d2b79f5);
        let mut t = self.seed;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        let out = t ^ (t >> 14);
        (out as f64 / 4_294_967_296.0) as f32
    }

    pub fn bool(&mut self, probability: f32) -> bool {
        self.next_f32() < probability
    }

    pub fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        (self.next_f32() * len as f32).floor().min((len - 1) as f32) as usize
    }

    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.pick_index(items.len())])
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.pick_index(i + 1);
            items.swap(i, j);
        }
    }
}
