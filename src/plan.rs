use crate::align::padding_for;
use crate::chunk::Chunk;
use crate::error::{LayoutError, LayoutResult};

/// Incremental layout cursor.
///
/// The cursor starts at `base_align + base_offset` rather than 0. Padding
/// only depends on the low bits of the cursor, and those are invariant under
/// translation by any multiple of `base_align`, so every pad computed here
/// stays correct once the layout is placed at a real address that is a
/// multiple of `base_align`. That is what lets the whole computation run on
/// abstract offsets before any memory exists.
///
/// Chunks are packed strictly in push order; callers wanting minimal padding
/// should push in descending alignment order.
///
/// # Examples
///
/// ```rust
/// use bytelayout::{Chunk, Planner};
///
/// let mut plan = Planner::new(8, 0)?;
/// let floats = plan.push(Chunk::of::<f32>(2)?)?;
/// let doubles = plan.push(Chunk::of::<f64>(2)?)?;
/// assert_eq!((floats, doubles), (0, 8));
/// assert_eq!(plan.total()?, 24);
/// # Ok::<(), bytelayout::LayoutError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    base: usize,
    pos: usize,
    limit: usize,
}

impl Planner {
    /// Starts a plan for a block whose real address will be a multiple of
    /// `base_align`, with the first usable position `base_offset` bytes past
    /// that boundary.
    pub fn new(base_align: usize, base_offset: isize) -> LayoutResult<Self> {
        if !base_align.is_power_of_two() {
            return Err(LayoutError::BadAlignment(base_align));
        }
        if base_offset < 0 {
            return Err(LayoutError::NegativeOffset(base_offset));
        }
        let base = base_align
            .checked_add(base_offset as usize)
            .ok_or(LayoutError::Overflow)?;
        Ok(Self {
            base,
            pos: base,
            limit: usize::MAX,
        })
    }

    /// Caps the total size this plan may reach. Exceeding the cap surfaces
    /// as [`LayoutError::Overflow`] from [`Planner::total`].
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Advances the cursor past `bytes` already consumed by a preceding,
    /// separately tracked object.
    pub fn reserve(&mut self, bytes: usize) -> LayoutResult<()> {
        self.pos = self.pos.checked_add(bytes).ok_or(LayoutError::Overflow)?;
        Ok(())
    }

    /// Places `chunk` at the next suitably aligned position and returns its
    /// offset from the first usable position (`base_align + base_offset`).
    pub fn push(&mut self, chunk: Chunk) -> LayoutResult<usize> {
        let size = chunk.byte_size()?;
        let pad = padding_for(self.pos, chunk.align());
        let advance = size.checked_add(pad).ok_or(LayoutError::Overflow)?;
        let end = self.pos.checked_add(advance).ok_or(LayoutError::Overflow)?;
        let offset = self.pos + pad - self.base;
        self.pos = end;
        Ok(offset)
    }

    /// Total bytes required so far, from the first usable position to the
    /// end of the last chunk. Leading slack from `base_align` itself is not
    /// counted.
    pub fn total(&self) -> LayoutResult<usize> {
        let total = self.pos - self.base;
        if total > self.limit {
            return Err(LayoutError::Overflow);
        }
        Ok(total)
    }
}

/// Computes the number of bytes needed to pack `chunks` consecutively, in
/// order, into a block aligned to `base_align`, starting `base_offset` bytes
/// past the block's alignment boundary, with `leading_reserved` bytes already
/// spoken for.
///
/// Fails on the first arithmetic step that would overflow; which chunk
/// caused it is not reported. Callers that need attribution can drive
/// [`Planner::push`] themselves.
///
/// # Examples
///
/// ```rust
/// use bytelayout::{Chunk, compute};
///
/// let chunks = [Chunk::new(2, 4, 4)?, Chunk::new(2, 8, 8)?];
/// assert_eq!(compute(8, 0, &chunks, 0)?, 24);
/// # Ok::<(), bytelayout::LayoutError>(())
/// ```
pub fn compute(
    base_align: usize,
    base_offset: isize,
    chunks: &[Chunk],
    leading_reserved: usize,
) -> LayoutResult<usize> {
    if chunks.is_empty() {
        return Err(LayoutError::EmptyPlan);
    }
    let mut plan = Planner::new(base_align, base_offset)?;
    plan.reserve(leading_reserved)?;
    for chunk in chunks {
        plan.push(*chunk)?;
    }
    plan.total()
}
