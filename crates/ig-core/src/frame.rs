/// Buffer de luminance. Un byte par pixel, row-major.
///
/// # Example
/// ```
/// use ig_core::frame::GrayFrame;
/// let frame = GrayFrame::new(10, 10);
/// assert_eq!(frame.data.len(), 100);
/// ```
pub struct GrayFrame {
    /// Luminance samples [0..255], row-major, 1 byte par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl GrayFrame {
    /// Crée un buffer pré-alloué aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use ig_core::frame::GrayFrame;
    /// let frame = GrayFrame::new(100, 50);
    /// assert_eq!(frame.width, 100);
    /// assert_eq!(frame.height, 50);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width * height) as usize],
            width,
            height,
        }
    }

    /// Wrap an existing raw luminance buffer.
    ///
    /// Returns `None` if the buffer length does not match `width * height`.
    #[must_use]
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        if data.len() != (width * height) as usize {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Accès au sample (x, y).
    ///
    /// # Example
    /// ```
    /// use ig_core::frame::GrayFrame;
    /// let frame = GrayFrame::new(10, 10);
    /// assert_eq!(frame.sample(0, 0), 0);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        let idx = (y * self.width + x) as usize;
        if idx >= self.data.len() {
            return 0;
        }
        self.data[idx]
    }
}

/// Grille de caractères finale, délimitée par des retours à la ligne.
///
/// Rectangulaire par construction : chaque ligne fait exactement `width`
/// caractères et il y a exactement `height` lignes, chacune terminée
/// par `\n`.
///
/// # Example
/// ```
/// use ig_core::frame::AsciiCanvas;
/// let canvas = AsciiCanvas::new("ab\ncd\n".to_string(), 2, 2);
/// assert_eq!(canvas.rows().count(), 2);
/// ```
pub struct AsciiCanvas {
    text: String,
    width: u32,
    height: u32,
}

impl AsciiCanvas {
    /// Wrap an assembled text block with its grid dimensions.
    #[must_use]
    pub fn new(text: String, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            text.lines().count(),
            height as usize,
            "row count does not match height"
        );
        Self {
            text,
            width,
            height,
        }
    }

    /// Largeur de la grille en caractères.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Nombre de lignes.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texte complet, lignes terminées par `\n`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Itérateur sur les lignes, sans les terminateurs.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Consomme le canvas et retourne le texte.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}
