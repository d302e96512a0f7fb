use core::marker::PhantomData;

use embedded_hal::i2c::{Error, ErrorKind, ErrorType};

use crate::mcp23017::{Async, Blocking, Mode};

#[derive(Debug)]
pub enum FakeI2cError {
    Error,
}
impl Error for FakeI2cError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Fake bus capturing every byte written to it. The driver never reads,
/// so only the write direction is modeled.
pub struct FakeI2cBus<const N: usize, M: Mode> {
    pub write_data: heapless::Vec<u8, N>,
    _mode: PhantomData<M>,
}

impl<const N: usize, M: Mode> ErrorType for FakeI2cBus<N, M> {
    type Error = FakeI2cError;
}

impl<const N: usize, M: Mode> FakeI2cBus<N, M> {
    fn new() -> Self {
        Self {
            write_data: heapless::Vec::new(),
            _mode: PhantomData,
        }
    }

    pub fn write_data_as_ref(&self) -> &[u8] {
        self.write_data.as_slice()
    }
}

impl<const N: usize> FakeI2cBus<N, Blocking> {
    pub fn new_blocking() -> Self {
        Self::new()
    }
}

impl<const N: usize> FakeI2cBus<N, Async> {
    pub fn new_async() -> Self {
        Self::new()
    }
}

impl<const N: usize> embedded_hal::i2c::I2c for FakeI2cBus<N, Blocking> {
    fn transaction(
        &mut self,
        _address: embedded_hal::i2c::SevenBitAddress,
        operations: &mut [embedded_hal::i2c::Operation],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                embedded_hal::i2c::Operation::Write(write) => {
                    self.write_data
                        .extend_from_slice(write)
                        .map_err(|_| FakeI2cError::Error)?;
                }
                embedded_hal::i2c::Operation::Read(_) => {}
            }
        }
        Ok(())
    }
}

impl<const N: usize> embedded_hal_async::i2c::I2c for FakeI2cBus<N, Async> {
    async fn transaction(
        &mut self,
        _address: embedded_hal_async::i2c::SevenBitAddress,
        operations: &mut [embedded_hal_async::i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                embedded_hal_async::i2c::Operation::Write(write) => {
                    self.write_data
                        .extend_from_slice(write)
                        .map_err(|_| FakeI2cError::Error)?;
                }
                embedded_hal_async::i2c::Operation::Read(_) => {}
            }
        }
        Ok(())
    }
}

/// Bus whose every transaction fails.
pub struct FailingI2cBus;

impl ErrorType for FailingI2cBus {
    type Error = FakeI2cError;
}

impl embedded_hal::i2c::I2c for FailingI2cBus {
    fn transaction(
        &mut self,
        _address: embedded_hal::i2c::SevenBitAddress,
        _operations: &mut [embedded_hal::i2c::Operation],
    ) -> Result<(), Self::Error> {
        Err(FakeI2cError::Error)
    }
}
