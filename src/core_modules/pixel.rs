// THEORY:
// The `Pixel` module is the smallest unit of the contrast pipeline. It is a
// "dumb" data container for one RGBA sample read out of the source image and
// knows nothing about neighbors or luminance caches.
//
// Two details matter to everything built on top of it:
// 1.  **Exact keys**: `Pixel` is `Copy + Eq + Hash` so it can key the relative
//     luminance cache directly. `rgb_key` drops alpha, since alpha plays no part
//     in the luminance formula and two colors differing only in alpha must share
//     one cache entry.
// 2.  **Normalization**: channels are exposed as samples in [0, 1] (byte / 255),
//     the form the luminance engine consumes.

pub mod pixel {
    pub type Byte = u8;
    pub type Channel = Byte;
    pub type NormalizedChannel = f64;
    pub type RgbKey = [Channel; 3];

    pub const CHANNELS: usize = 4;

    /// A single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha channel value (0-255). Carried, never used for contrast.
        pub alpha: Channel,
    }

    impl Pixel {
        pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
        pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);

        pub const fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Opaque pixel.
        pub const fn rgb(red: Channel, green: Channel, blue: Channel) -> Self {
            Self::new(red, green, blue, Channel::MAX)
        }

        /// Cache key for luminance lookups; alpha is deliberately absent.
        pub fn rgb_key(&self) -> RgbKey {
            [self.red, self.green, self.blue]
        }

        /// Channels as samples in [0, 1].
        pub fn normalized(&self) -> (NormalizedChannel, NormalizedChannel, NormalizedChannel) {
            (
                Self::normalize(self.red),
                Self::normalize(self.green),
                Self::normalize(self.blue),
            )
        }

        #[inline]
        pub fn normalize(channel: Channel) -> NormalizedChannel {
            channel as NormalizedChannel / Channel::MAX as NormalizedChannel
        }
    }

    impl From<[Byte; CHANNELS]> for Pixel {
        fn from(bytes: [Byte; CHANNELS]) -> Self {
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }

    impl From<image::Rgba<u8>> for Pixel {
        fn from(rgba: image::Rgba<u8>) -> Self {
            Pixel::from(rgba.0)
        }
    }
}
