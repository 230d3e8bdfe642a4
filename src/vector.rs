use crate::error::{Error, Result};

/// A fixed-size, indexable sequence of elements.
///
/// Vectors are read-only unless an implementation overrides [`Vector::set`].
pub trait Vector {
    type Element;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns the element at `index`, or `Error::IndexOutOfBounds` if `index >= size()`.
    fn get(&self, index: usize) -> Result<&Self::Element>;

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// Fails with `Error::UnsupportedOperation` unless the implementation supports it.
    fn set(&mut self, _index: usize, _element: Self::Element) -> Result<Self::Element> {
        Err(Error::UnsupportedOperation("set"))
    }
}

fn check_index(index: usize, size: usize) -> Result<()> {
    if index >= size {
        debug!("index {} rejected for vector of size {}", index, size);
        return Err(Error::IndexOutOfBounds { index: index, size: size });
    }
    Ok(())
}

impl<T> Vector for [T] {
    type Element = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.len())?;
        Ok(&self[index])
    }
}

impl<T> Vector for Vec<T> {
    type Element = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        Vector::get(self.as_slice(), index)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T> {
        check_index(index, self.len())?;
        Ok(std::mem::replace(&mut self[index], element))
    }
}

//--------------------------------------------------------------------------------------------------
