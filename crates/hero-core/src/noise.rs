/// Hashed trilinear value noise in \[-1, 1\].
///
/// Each engine owns its own instance so two clouds on the same page never
/// share a seed, and tests can pin the pattern.
#[derive(Clone, Copy, Debug)]
pub struct ValueNoise {
    seed: f32,
}

impl ValueNoise {
    pub fn new(seed: f32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> f32 {
        self.seed
    }

    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());
        let (cx, cy, cz) = (lattice(xf), lattice(yf), lattice(zf));
        let (fx, fy, fz) = (x - xf, y - yf, z - zf);

        let u = fade(fx);
        let v = fade(fy);
        let w = fade(fz);

        let corner = |dx: f32, dy: f32, dz: f32| {
            let n = ((cx + dx) + (cy + dy) * 57.0 + (cz + dz) * 131.0 + self.seed) * 15731.0;
            hash(n)
        };

        let x00 = lerp(corner(0.0, 0.0, 0.0), corner(1.0, 0.0, 0.0), u);
        let x10 = lerp(corner(0.0, 1.0, 0.0), corner(1.0, 1.0, 0.0), u);
        let x01 = lerp(corner(0.0, 0.0, 1.0), corner(1.0, 0.0, 1.0), u);
        let x11 = lerp(corner(0.0, 1.0, 1.0), corner(1.0, 1.0, 1.0), u);

        lerp(lerp(x00, x10, v), lerp(x01, x11, v), w) * 2.0 - 1.0
    }
}

// Wrap lattice coordinates into 0..256 so large inputs keep f32 precision.
#[inline]
fn lattice(v: f32) -> f32 {
    ((v as i64) & 255) as f32
}

#[inline]
fn fade(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn hash(n: f32) -> f32 {
    let h = (n as f64).sin() * 43758.5453;
    (h - h.floor()) as f32
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}
