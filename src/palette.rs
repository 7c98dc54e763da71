//! Categorical colors for cluster ids.
//!
//! The palette spreads `n` hues evenly around the HLS color wheel, starting
//! slightly off red, with a fixed lightness and saturation. Cluster `i` gets
//! the `i`-th hue.

use crate::Error;
use crate::Result;

const HUE_OFFSET: f64 = 0.01;
const LIGHTNESS: f64 = 0.6;
const SATURATION: f64 = 0.65;

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self(channel(r), channel(g), channel(b))
    }
}

/// Converts a color from HLS space, all components in `[0, 1]`.
pub fn hls_to_rgb(hue: f64, lightness: f64, saturation: f64) -> Rgb {
    if saturation == 0.0 {
        return Rgb::from_unit(lightness, lightness, lightness);
    }
    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = 2.0 * lightness - m2;
    let channel = |hue: f64| {
        let hue = hue.rem_euclid(1.0);
        if hue < 1.0 / 6.0 {
            m1 + (m2 - m1) * hue * 6.0
        } else if hue < 0.5 {
            m2
        } else if hue < 2.0 / 3.0 {
            m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
        } else {
            m1
        }
    };
    Rgb::from_unit(
        channel(hue + 1.0 / 3.0),
        channel(hue),
        channel(hue - 1.0 / 3.0),
    )
}

/// A fixed set of colors, one per declared cluster.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Builds a palette of `clusters` evenly spaced hues.
    pub fn hls(clusters: usize) -> Result<Self> {
        if clusters == 0 {
            return Err(Error::EmptyPalette);
        }
        let colors = (0..clusters)
            .map(|i| {
                let hue = (i as f64 / clusters as f64 + HUE_OFFSET).fract();
                hls_to_rgb(hue, LIGHTNESS, SATURATION)
            })
            .collect();
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Returns the color of a cluster.
    ///
    /// Ids past the end of the palette wrap around, which makes different
    /// clusters share a color. Use [`Palette::check`] to reject them instead.
    pub fn color(&self, cluster: usize) -> Rgb {
        self.colors[cluster % self.colors.len()]
    }

    /// Fails on the first cluster id that has no color of its own.
    pub fn check<I>(&self, clusters: I) -> Result<()>
    where
        I: IntoIterator<Item = usize>,
    {
        match clusters.into_iter().find(|cluster| self.colors.len() <= *cluster) {
            Some(cluster) => Err(Error::ClusterOutOfPalette {
                cluster,
                clusters: self.colors.len(),
            }),
            None => Ok(()),
        }
    }
}
