//! Random point files.

use crate::Layout;
use anyhow::Context as _;
use anyhow::Result;
use kpoints::sampling;
use kpoints::Range;
use point_io::plain::Points;
use rand::SeedableRng as _;
use std::path::Path;
use std::path::PathBuf;

pub const DEFAULT_COUNT: usize = 1000;
pub const DEFAULT_MAXIMUM: i64 = 5000;
pub use crate::layout::DEFAULT_FILENAME;

#[derive(Clone, Copy, Debug)]
pub struct Generator {
    pub count: usize,
    pub range: Range,
    /// Sample integer coordinates instead of reals.
    pub integers: bool,
    /// Seed of the random number generator, taken from the OS when `None`.
    pub seed: Option<u64>,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            range: Range::default(),
            integers: false,
            seed: None,
        }
    }
}

impl Generator {
    pub fn new(count: usize, maximum: i64) -> Result<Self> {
        let range = Range::new(maximum as f64)?;
        Ok(Self {
            count,
            range,
            ..Self::default()
        })
    }

    fn rng(&self) -> rand_pcg::Pcg64 {
        match self.seed {
            Some(seed) => rand_pcg::Pcg64::seed_from_u64(seed),
            None => rand_pcg::Pcg64::from_entropy(),
        }
    }

    pub fn points(&self) -> Points {
        let mut rng = self.rng();
        if self.integers {
            Points::Integers(sampling::uniform_integer_points(
                &mut rng, self.count, self.range,
            ))
        } else {
            let points = sampling::uniform_points(&mut rng, self.count, self.range);
            Points::Floats(points.into_iter().map(|p| [p.x, p.y]).collect())
        }
    }

    /// Overwrites `path` with a fresh set of points.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let points = self.points();
        let output = crate::writer(path)?;
        points
            .write(output)
            .with_context(|| format!("failed to write points to {}", path.display()))?;
        tracing::info!(count = points.len(), path = %path.display(), "wrote points");
        Ok(())
    }
}

/// Where `point-gen` writes `filename`: under the inputs directory, created
/// on demand, or directly under the root.
pub fn output_path(layout: &Layout, filename: &str, in_inputs: bool) -> Result<PathBuf> {
    Ok(if in_inputs {
        layout.create_inputs_dir()?.join(filename)
    } else {
        layout.root().join(filename)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prop_assert;
    use proptest::prop_assert_eq;
    use std::fs;

    fn generator(count: usize, maximum: i64, seed: u64) -> Generator {
        Generator {
            seed: Some(seed),
            ..Generator::new(count, maximum).unwrap()
        }
    }

    #[test]
    fn negative_maximum() {
        let err = Generator::new(10, -1).unwrap_err();
        assert!(err.to_string().contains("invalid coordinate maximum"), "{err}");
    }

    #[test]
    fn ten_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.txt");
        generator(10, 100, 7).write_file(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 10);
        for line in content.lines() {
            let fields: Vec<f64> = line
                .split_whitespace()
                .map(|field| field.parse().unwrap())
                .collect();
            assert_eq!(fields.len(), 2, "{line:?}");
            assert!(fields.iter().all(|v| (0.0..=100.0).contains(v)), "{line:?}");
            assert_eq!(line.len(), 21, "{line:?}");
        }
    }

    #[test]
    fn integer_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.txt");
        let generator = Generator {
            integers: true,
            ..generator(25, 9, 3)
        };
        generator.write_file(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 25);
        for line in content.lines() {
            for field in line.split_whitespace() {
                let v: i64 = field.parse().unwrap();
                assert!((0..=9).contains(&v));
            }
        }
    }

    #[test]
    fn zero_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        generator(0, 100, 0).write_file(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"");
    }

    #[test]
    fn overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.txt");
        generator(30, 100, 1).write_file(&path).unwrap();
        generator(30, 100, 2).write_file(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 30);
    }

    #[test]
    fn creates_inputs_dir() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        let path = output_path(&layout, "t.txt", true).unwrap();
        assert_eq!(path, dir.path().join("inputs").join("t.txt"));
        assert!(dir.path().join("inputs").is_dir());

        let path = output_path(&layout, "u.txt", false).unwrap();
        assert_eq!(path, dir.path().join("u.txt"));
    }

    proptest::proptest!(
        #[test]
        fn rewrite_keeps_last_count(
            first in 0usize..200,
            second in 0usize..200,
            integers in proptest::bool::ANY,
            seed in proptest::num::u64::ANY,
        ) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("t.txt");
            Generator { integers, ..generator(first, 5000, seed) }
                .write_file(&path)
                .unwrap();
            Generator { integers, ..generator(second, 5000, seed) }
                .write_file(&path)
                .unwrap();

            let points = point_io::plain::read(fs::read(&path).unwrap().as_slice()).unwrap();
            prop_assert_eq!(points.len(), second);
            for [x, y] in points {
                prop_assert!((0.0..=5000.0).contains(&x) && (0.0..=5000.0).contains(&y));
            }
        }
    );
}
