use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::codec::{self, Format};
use crate::error::{DiceError, Result, StoreError};
use crate::shape::{Shape, ShapeId};

/// Where the store looks for shape files.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding `<id>` and `<id>.obj` files.
    pub dir: PathBuf,
    /// Shape ids tried by [`ShapeStore::load_all`].
    pub ids: RangeInclusive<ShapeId>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            ids: 4..=20,
        }
    }
}

/// Outcome of exporting every loaded shape.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Number of shapes written successfully.
    pub written: usize,
    /// The first failure, if any shape could not be written.
    pub first_error: Option<DiceError>,
}

impl ExportReport {
    /// Converts the report into a result carrying the success count.
    ///
    /// # Errors
    ///
    /// Returns the first export failure, if any.
    pub fn into_result(self) -> Result<usize> {
        match self.first_error {
            Some(err) => Err(err),
            None => Ok(self.written),
        }
    }
}

/// In-memory collection of loaded shapes and their scale factors.
///
/// Stored points are never modified. Scale factors are applied to a copy at
/// export time. Iteration is in ascending id order.
#[derive(Debug, Default)]
pub struct ShapeStore {
    config: StoreConfig,
    shapes: BTreeMap<ShapeId, Shape>,
    scales: BTreeMap<ShapeId, f64>,
}

impl ShapeStore {
    /// Creates an empty store reading from and writing to `config.dir`.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            shapes: BTreeMap::new(),
            scales: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Path of the custom-format file for `id`.
    #[must_use]
    pub fn custom_path(&self, id: ShapeId) -> PathBuf {
        self.config.dir.join(id.to_string())
    }

    /// Path of the OBJ file for `id`.
    #[must_use]
    pub fn obj_path(&self, id: ShapeId) -> PathBuf {
        self.config.dir.join(format!("{id}.obj"))
    }

    // --- Loading ---

    /// Loads shape `id`, preferring the bare `<id>` file over `<id>.obj`.
    ///
    /// Returns `true` if the shape was loaded. A missing or unreadable file
    /// leaves the id absent; failures are logged, never propagated.
    pub fn load(&mut self, id: ShapeId) -> bool {
        match self.try_load(id) {
            Ok(shape) => {
                self.insert(id, shape);
                true
            }
            Err(DiceError::Store(StoreError::MissingFile { .. })) => {
                tracing::debug!(id, "no shape file");
                false
            }
            Err(err) => {
                tracing::warn!(id, %err, "skipping shape");
                false
            }
        }
    }

    /// Loads every id in the configured range. Returns how many were loaded.
    pub fn load_all(&mut self) -> usize {
        let loaded = self.config.ids.clone().filter(|&id| self.load(id)).count();
        tracing::info!(loaded, dir = %self.config.dir.display(), "loaded shapes");
        loaded
    }

    fn try_load(&self, id: ShapeId) -> Result<Shape> {
        let path = self.locate(id).ok_or(StoreError::MissingFile { id })?;
        codec::read_shape(&path)
    }

    fn locate(&self, id: ShapeId) -> Option<PathBuf> {
        [self.custom_path(id), self.obj_path(id)]
            .into_iter()
            .find(|p| p.is_file())
    }

    /// Adds a shape with a scale factor of 1.0, replacing any shape under `id`.
    pub fn insert(&mut self, id: ShapeId, shape: Shape) {
        self.shapes.insert(id, shape);
        self.scales.insert(id, 1.0);
    }

    // --- Queries ---

    /// Returns the shape stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no shape is loaded under `id`.
    pub fn shape(&self, id: ShapeId) -> std::result::Result<&Shape, StoreError> {
        self.shapes.get(&id).ok_or(StoreError::NotLoaded { id })
    }

    /// Returns the current scale factor of `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no shape is loaded under `id`.
    pub fn scale(&self, id: ShapeId) -> std::result::Result<f64, StoreError> {
        self.scales
            .get(&id)
            .copied()
            .ok_or(StoreError::NotLoaded { id })
    }

    #[must_use]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Loaded ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.shapes.keys().copied()
    }

    /// Iterates `(id, shape, scale)` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape, f64)> + '_ {
        self.shapes
            .iter()
            .map(|(&id, shape)| (id, shape, self.scales.get(&id).copied().unwrap_or(1.0)))
    }

    // --- Scaling ---

    /// Multiplies the scale factor of `id` by `factor` and returns the new scale.
    ///
    /// There is no lower or upper bound. Only results that are not a finite
    /// positive number are refused.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not loaded, or if `factor` or the resulting
    /// scale is zero, negative, or not finite. The stored scale is unchanged
    /// in that case.
    pub fn rescale(&mut self, id: ShapeId, factor: f64) -> std::result::Result<f64, StoreError> {
        self.update_scale(id, factor, |scale| scale * factor)
    }

    /// Divides the scale factor of `id` by `divisor` and returns the new scale.
    ///
    /// Dividing by the same step used in [`ShapeStore::rescale`] undoes a
    /// scale-up exactly, which multiplying by the reciprocal does not.
    ///
    /// # Errors
    ///
    /// Same as [`ShapeStore::rescale`], with `divisor` in place of `factor`.
    pub fn rescale_down(
        &mut self,
        id: ShapeId,
        divisor: f64,
    ) -> std::result::Result<f64, StoreError> {
        self.update_scale(id, divisor, |scale| scale / divisor)
    }

    fn update_scale(
        &mut self,
        id: ShapeId,
        factor: f64,
        apply: impl FnOnce(f64) -> f64,
    ) -> std::result::Result<f64, StoreError> {
        let scale = self
            .scales
            .get_mut(&id)
            .ok_or(StoreError::NotLoaded { id })?;
        let next = apply(*scale);
        if !is_usable_scale(factor) || !is_usable_scale(next) {
            return Err(StoreError::DegenerateScale { id, factor });
        }
        *scale = next;
        tracing::debug!(id, scale = next, "rescaled shape");
        Ok(next)
    }

    // --- Export ---

    /// Writes shape `id` at its current scale in the custom format.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not loaded or the file cannot be written.
    pub fn export_custom(&self, id: ShapeId) -> Result<PathBuf> {
        let path = self.custom_path(id);
        self.export(id, &path, Format::Custom)?;
        Ok(path)
    }

    /// Writes shape `id` at its current scale as OBJ.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not loaded or the file cannot be written.
    pub fn export_obj(&self, id: ShapeId) -> Result<PathBuf> {
        let path = self.obj_path(id);
        self.export(id, &path, Format::Obj)?;
        Ok(path)
    }

    /// Exports every loaded shape in the custom format.
    pub fn export_all_custom(&self) -> ExportReport {
        self.export_all(Self::export_custom)
    }

    /// Exports every loaded shape as OBJ.
    pub fn export_all_obj(&self) -> ExportReport {
        self.export_all(Self::export_obj)
    }

    fn export(&self, id: ShapeId, path: &Path, format: Format) -> Result<()> {
        let shape = self.shape(id)?;
        let scaled = shape.scaled(self.scale(id)?);
        codec::write_shape(path, &scaled, format)
    }

    fn export_all(&self, export_one: impl Fn(&Self, ShapeId) -> Result<PathBuf>) -> ExportReport {
        let mut report = ExportReport::default();
        for id in self.ids() {
            match export_one(self, id) {
                Ok(_) => report.written += 1,
                Err(err) => {
                    tracing::error!(id, %err, "export failed");
                    report.first_error.get_or_insert(err);
                }
            }
        }
        report
    }
}

fn is_usable_scale(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
