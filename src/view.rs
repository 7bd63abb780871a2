use std::borrow::Cow;

use crate::error::{Error, Result};

/// Describes a source memory region: an element size in bytes, an ordered
/// list of extents, and a matching list of byte strides. Traversal is
/// row-major, with the innermost (last) dimension varying fastest.
///
/// A view is validated once, at construction. After that, flattening cannot
/// fail: every addressable element is known to sit inside `data`.
#[derive(Clone, Debug)]
pub struct BufferView<'a> {
    data: &'a [u8],
    item_size: usize,
    shape: Vec<usize>,
    strides: Vec<isize>,
}

impl<'a> BufferView<'a> {
    /// Build a view from explicit metadata, validating that it can be
    /// reconciled into a linear byte order. Fails with
    /// [`Error::InvalidBufferShape`] if the element size is zero, extents and
    /// strides disagree in rank, a stride isn't element-aligned, or any
    /// addressable element falls outside `data`.
    pub fn new(
        data: &'a [u8],
        item_size: usize,
        shape: Vec<usize>,
        strides: Vec<isize>,
    ) -> Result<Self> {
        if item_size == 0 {
            return Err(Error::InvalidBufferShape(
                "element size is zero".to_string(),
            ));
        }
        if shape.len() != strides.len() {
            return Err(Error::InvalidBufferShape(format!(
                "{} extents declared against {} strides",
                shape.len(),
                strides.len()
            )));
        }
        for &stride in &strides {
            if stride.unsigned_abs() % item_size != 0 {
                return Err(Error::InvalidBufferShape(format!(
                    "stride of {} bytes is not a multiple of the {}-byte element size",
                    stride, item_size
                )));
            }
        }
        let mut total = item_size as u64;
        for &extent in &shape {
            total = total.checked_mul(extent as u64).ok_or_else(|| {
                Error::InvalidBufferShape("extent product overflows".to_string())
            })?;
        }
        // An empty view addresses no elements, so its strides never get used.
        if total > 0 {
            let mut min_off: i128 = 0;
            let mut max_off: i128 = 0;
            for (&extent, &stride) in shape.iter().zip(&strides) {
                let span = (extent as i128 - 1) * stride as i128;
                if span >= 0 {
                    max_off += span;
                } else {
                    min_off += span;
                }
            }
            if min_off < 0 {
                return Err(Error::InvalidBufferShape(
                    "strides address memory before the buffer start".to_string(),
                ));
            }
            if max_off + item_size as i128 > data.len() as i128 {
                return Err(Error::InvalidBufferShape(format!(
                    "view reaches byte {} of a {}-byte buffer",
                    max_off + item_size as i128,
                    data.len()
                )));
            }
        }
        Ok(BufferView {
            data,
            item_size,
            shape,
            strides,
        })
    }

    /// Build a C-contiguous view over `data`, deriving the strides from the
    /// extents: the innermost stride is the element size, and each outer
    /// stride is the next one multiplied by its extent.
    pub fn contiguous(data: &'a [u8], item_size: usize, shape: Vec<usize>) -> Result<Self> {
        if item_size == 0 {
            return Err(Error::InvalidBufferShape(
                "element size is zero".to_string(),
            ));
        }
        let mut strides = vec![0isize; shape.len()];
        let mut acc = item_size as u64;
        for (stride, &extent) in strides.iter_mut().zip(&shape).rev() {
            *stride = isize::try_from(acc).map_err(|_| {
                Error::InvalidBufferShape("stride overflows the address space".to_string())
            })?;
            acc = acc.saturating_mul(extent as u64);
        }
        Self::new(data, item_size, shape, strides)
    }

    /// The common case: a 1-D view of single-byte elements.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        BufferView {
            data,
            item_size: 1,
            shape: vec![data.len()],
            strides: vec![1],
        }
    }

    /// Total byte length of the flattened payload:
    /// element size times the product of all extents.
    pub fn len(&self) -> u64 {
        self.shape
            .iter()
            .fold(self.item_size as u64, |acc, &extent| acc * extent as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn item_size(&self) -> usize {
        self.item_size
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// True when the elements already sit in one linear run, so flattening is
    /// a projection rather than a copy. Dimensions with extent 0 or 1 place
    /// no constraint on their stride.
    pub fn is_contiguous(&self) -> bool {
        if self.len() == 0 {
            return true;
        }
        let mut expected = self.item_size as i128;
        for (&extent, &stride) in self.shape.iter().zip(&self.strides).rev() {
            if extent > 1 && stride as i128 != expected {
                return false;
            }
            expected *= extent as i128;
        }
        true
    }

    /// Flatten the view into a single contiguous byte sequence, preserving
    /// the element ordering implied by the strides. Contiguous views borrow;
    /// strided views gather row-major into a fresh buffer.
    ///
    /// Reshaping a contiguous buffer never changes this output: total bytes
    /// and traversal order are both unchanged.
    pub fn flatten(&self) -> Cow<'a, [u8]> {
        let data = self.data;
        let total = self.len();
        if total == 0 {
            return Cow::Borrowed(&[]);
        }
        if self.is_contiguous() {
            return Cow::Borrowed(&data[..total as usize]);
        }
        let mut out = Vec::with_capacity(total as usize);
        self.gather(0, 0, &mut out);
        Cow::Owned(out)
    }

    // Row-major recursive gather. Offsets were bounds-checked at
    // construction, so the indexing here cannot go out of range.
    fn gather(&self, dim: usize, offset: isize, out: &mut Vec<u8>) {
        if dim == self.shape.len() {
            let start = offset as usize;
            out.extend_from_slice(&self.data[start..start + self.item_size]);
            return;
        }
        let stride = self.strides[dim];
        for step in 0..self.shape[dim] {
            self.gather(dim + 1, offset + step as isize * stride, out);
        }
    }
}

impl<'a> From<&'a [u8]> for BufferView<'a> {
    fn from(data: &'a [u8]) -> Self {
        BufferView::from_bytes(data)
    }
}

impl<'a> From<&'a str> for BufferView<'a> {
    fn from(data: &'a str) -> Self {
        BufferView::from_bytes(data.as_bytes())
    }
}
