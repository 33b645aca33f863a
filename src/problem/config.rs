//! Map generation parameters.

/// Parameters for generating a fresh problem map.
///
/// # Examples
///
/// ```
/// use mtsp_anneal::problem::MapParams;
///
/// let params = MapParams::default()
///     .with_num_tours(2)
///     .with_num_cities(40)
///     .with_dimensions(80, 60);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapParams {
    /// Number of round trips sharing the city set. At least 1.
    pub num_tours: usize,

    /// Number of cities to place on the map. May be 0.
    pub num_cities: usize,

    /// Map width; city x coordinates fall in `[0, width)`.
    pub width: i32,

    /// Map height; city y coordinates fall in `[0, height)`.
    pub height: i32,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            num_tours: 3,
            num_cities: 50,
            width: 100,
            height: 100,
        }
    }
}

impl MapParams {
    pub fn with_num_tours(mut self, n: usize) -> Self {
        self.num_tours = n;
        self
    }

    pub fn with_num_cities(mut self, n: usize) -> Self {
        self.num_cities = n;
        self
    }

    pub fn with_dimensions(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Validates the parameters.
    ///
    /// Besides the basic range checks, cities must fit on the integer
    /// grid: placement draws distinct coordinates until `num_cities`
    /// positions are found, which only terminates when
    /// `num_cities <= width * height`.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_tours < 1 {
            return Err("num_tours must be at least 1".into());
        }
        if self.width < 1 || self.height < 1 {
            return Err(format!(
                "map dimensions must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        let capacity = self.width as u64 * self.height as u64;
        if self.num_cities as u64 > capacity {
            return Err(format!(
                "{} cities cannot be placed distinctly on a {}x{} map",
                self.num_cities, self.width, self.height
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = MapParams::default();
        assert_eq!(params.num_tours, 3);
        assert_eq!(params.num_cities, 50);
        assert_eq!(params.width, 100);
        assert_eq!(params.height, 100);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_tours() {
        assert!(MapParams::default().with_num_tours(0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_dimensions() {
        assert!(MapParams::default().with_dimensions(0, 10).validate().is_err());
        assert!(MapParams::default().with_dimensions(10, -5).validate().is_err());
    }

    #[test]
    fn test_validate_too_many_cities() {
        let params = MapParams::default().with_dimensions(3, 3).with_num_cities(10);
        assert!(params.validate().is_err());
        let exact_fit = MapParams::default().with_dimensions(3, 3).with_num_cities(9);
        assert!(exact_fit.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_cities_ok() {
        assert!(MapParams::default().with_num_cities(0).validate().is_ok());
    }
}
