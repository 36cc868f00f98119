//! Cursor-based byte buffer with bounds enforcement
//!
//! A [`Stuffer`] owns a fixed allocation of `capacity` bytes and two cursors:
//!
//! ```text
//! 0            read_cursor        write_cursor         capacity
//! |---consumed---|-----available-----|-----space-----|
//! ```
//!
//! Writes append at `write_cursor`, reads consume from `read_cursor`, and
//! `0 <= read_cursor <= write_cursor <= capacity` holds after every call.
//! A failed read or write leaves both cursors and the contents untouched.
//!
//! Zero-copy views returned by [`Stuffer::raw_read`] and
//! [`Stuffer::read_line`] borrow the stuffer mutably, so the borrow checker
//! rejects any write (which may reallocate) while a view is alive.

use byteorder::{BigEndian, ByteOrder};
use core::fmt;
use dstuffer_api::error::validation;
use dstuffer_api::{Error, Result};
use dstuffer_internal::secure_zero;
use dstuffer_params::buffer::{GROWTH_FACTOR, MIN_GROWTH_BYTES};
use log::debug;

mod text;


/// Growable or fixed-size byte buffer with independent read/write cursors
pub struct Stuffer {
    // Always exactly `capacity` bytes long; unwritten bytes are zero.
    blob: Vec<u8>,
    read_cursor: usize,
    write_cursor: usize,
    growable: bool,
    freed: bool,
}

impl Stuffer {
    /// Allocate a fixed-size stuffer of `capacity` zeroed bytes
    pub fn alloc(capacity: usize) -> Self {
        Self {
            blob: vec![0u8; capacity],
            read_cursor: 0,
            write_cursor: 0,
            growable: false,
            freed: false,
        }
    }

    /// Allocate a stuffer that reallocates instead of failing when full
    pub fn growable_alloc(capacity: usize) -> Self {
        let mut stuffer = Self::alloc(capacity);
        stuffer.growable = true;
        stuffer
    }

    /// Fixed-size stuffer holding a copy of `data`, ready to be read
    pub fn with_data(data: &[u8]) -> Self {
        Self {
            blob: data.to_vec(),
            read_cursor: 0,
            write_cursor: data.len(),
            growable: false,
            freed: false,
        }
    }

    /// Total bytes the current allocation can hold
    pub fn capacity(&self) -> usize {
        self.blob.len()
    }

    /// Bytes written but not yet read
    pub fn data_available(&self) -> usize {
        self.write_cursor - self.read_cursor
    }

    /// Bytes that can be written without growing
    pub fn space_remaining(&self) -> usize {
        self.blob.len() - self.write_cursor
    }

    pub fn read_cursor(&self) -> usize {
        self.read_cursor
    }

    pub fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    pub fn is_growable(&self) -> bool {
        self.growable
    }

    /// True once [`Stuffer::free`] has run
    pub fn is_freed(&self) -> bool {
        self.freed
    }

    /// Unread bytes, without advancing the read cursor
    pub fn unread(&self) -> &[u8] {
        &self.blob[self.read_cursor..self.write_cursor]
    }

    /// Make room for `n` more bytes, growing if permitted
    pub fn reserve(&mut self, n: usize) -> Result<()> {
        if n <= self.space_remaining() {
            return Ok(());
        }
        if !self.growable {
            return validation::space_remaining("stuffer write", n, self.space_remaining());
        }

        let required = self.write_cursor.checked_add(n).ok_or(Error::OutOfSpace {
            context: "stuffer grow",
            requested: n,
            remaining: self.space_remaining(),
        })?;
        let geometric = self.capacity().saturating_mul(GROWTH_FACTOR);
        let stepped = self.capacity().saturating_add(MIN_GROWTH_BYTES);
        let new_capacity = required.max(geometric).max(stepped);

        let mut grown = vec![0u8; new_capacity];
        grown[..self.write_cursor].copy_from_slice(&self.blob[..self.write_cursor]);
        secure_zero(&mut self.blob);
        self.blob = grown;

        debug!("stuffer grew to {} bytes ({} required)", new_capacity, required);
        Ok(())
    }

    /// Append `data` at the write cursor
    pub fn write(&mut self, data: &[u8]) -> Result<()> {
        self.reserve(data.len())?;
        let end = self.write_cursor + data.len();
        self.blob[self.write_cursor..end].copy_from_slice(data);
        self.write_cursor = end;
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write(&[value])
    }

    /// Write a big-endian u16
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        let mut buf = [0u8; 2];
        BigEndian::write_u16(&mut buf, value);
        self.write(&buf)
    }

    /// Write the low 24 bits of `value`, big-endian
    pub fn write_u24(&mut self, value: u32) -> Result<()> {
        validation::parameter(value < (1 << 24), "stuffer write_u24", "value exceeds 24 bits")?;
        let mut buf = [0u8; 3];
        BigEndian::write_u24(&mut buf, value);
        self.write(&buf)
    }

    /// Borrow `n` unread bytes in place and advance the read cursor
    ///
    /// The slice stays valid only while the stuffer is not touched again.
    pub fn raw_read(&mut self, n: usize) -> Result<&[u8]> {
        validation::data_available("stuffer read", n, self.data_available())?;
        let start = self.read_cursor;
        self.read_cursor += n;
        Ok(&self.blob[start..self.read_cursor])
    }

    /// Copy `n` unread bytes out and advance the read cursor
    pub fn read(&mut self, n: usize) -> Result<Vec<u8>> {
        self.raw_read(n).map(<[u8]>::to_vec)
    }

    /// Fill `dest` from the unread data
    pub fn read_into(&mut self, dest: &mut [u8]) -> Result<()> {
        let src = self.raw_read(dest.len())?;
        dest.copy_from_slice(src);
        Ok(())
    }

    /// Advance the read cursor by `n` without copying
    pub fn skip_read(&mut self, n: usize) -> Result<()> {
        self.raw_read(n).map(|_| ())
    }

    /// Next unread byte, without consuming it
    pub fn peek_u8(&self) -> Result<u8> {
        validation::data_available("stuffer peek", 1, self.data_available())?;
        Ok(self.blob[self.read_cursor])
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let value = self.peek_u8()?;
        self.read_cursor += 1;
        Ok(value)
    }

    /// Read a big-endian u16
    pub fn read_u16(&mut self) -> Result<u16> {
        self.raw_read(2).map(BigEndian::read_u16)
    }

    /// Read a big-endian 24-bit value
    pub fn read_u24(&mut self) -> Result<u32> {
        self.raw_read(3).map(BigEndian::read_u24)
    }

    /// Move the read cursor back to the start of the data
    pub fn reread(&mut self) {
        self.read_cursor = 0;
    }

    /// Discard all data, keeping the allocation
    pub fn rewrite(&mut self) {
        self.read_cursor = 0;
        self.write_cursor = 0;
    }

    /// Zero the contents and reset both cursors
    pub fn wipe(&mut self) {
        secure_zero(&mut self.blob);
        self.rewrite();
    }

    /// Zero and release the buffer
    ///
    /// Afterwards capacity, both cursors and the growable flag are zero, so
    /// every write fails with `OutOfSpace` and every read with `OutOfData`.
    pub fn free(&mut self) {
        self.wipe();
        self.blob = Vec::new();
        self.growable = false;
        self.freed = true;
    }

    /// Move the read cursor to an absolute position within the written data
    ///
    /// Parsers record `read_cursor()` before an attempt and seek back to it
    /// when the attempt fails.
    pub fn seek_read(&mut self, position: usize) -> Result<()> {
        validation::data_available("stuffer seek", position, self.write_cursor)?;
        self.read_cursor = position;
        Ok(())
    }
}

impl Drop for Stuffer {
    fn drop(&mut self) {
        secure_zero(&mut self.blob);
    }
}

// Contents may be key material, so only the shape is printed.
impl fmt::Debug for Stuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stuffer")
            .field("capacity", &self.capacity())
            .field("read_cursor", &self.read_cursor)
            .field("write_cursor", &self.write_cursor)
            .field("growable", &self.growable)
            .field("freed", &self.freed)
            .finish()
    }
}
