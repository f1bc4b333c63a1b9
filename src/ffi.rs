//! C ABI over the global [`HandleTable`]. Functions return `0` on success or
//! the failing [`ErrorKind`](crate::ErrorKind)'s code.

use crate::{Error, HandleTable};
use std::slice;

fn status(result: Result<(), Error>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => error.kind().code(),
    }
}

#[no_mangle]
pub extern "C" fn script_container_init() -> u64 {
    HandleTable::global().create()
}

/// # Safety
///
/// Unless `script` is null, it must point to `script_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn script_container_add_script(handle: u64, amount: i64, script: *const u8, script_len: usize) -> i32 {
    let script = match (script.is_null(), script_len) {
        (true, 0) => &[][..],
        (true, _) => return status(Err(Error::invalid_argument("Null script with non-zero length"))),
        (false, _) => slice::from_raw_parts(script, script_len),
    };
    status(HandleTable::global().append(handle, amount, script))
}

#[no_mangle]
pub extern "C" fn script_container_delete(handle: u64) {
    HandleTable::global().dispose(handle);
}

/// # Safety
///
/// `len` must be null or valid for a write of one `usize`.
#[no_mangle]
pub unsafe extern "C" fn script_container_len(handle: u64, len: *mut usize) -> i32 {
    if len.is_null() {
        return status(Err(Error::invalid_argument("Null length pointer")));
    }
    match HandleTable::global().with(handle, |container| container.len()).and_then(|result| result) {
        Ok(value) => {
            *len = value;
            0
        }
        Err(error) => error.kind().code(),
    }
}

#[cfg(test)]
mod tests {
    use super::{script_container_add_script, script_container_delete, script_container_init, script_container_len};
    use std::ptr;

    #[test]
    fn lifecycle() {
        let handle = script_container_init();
        let script = [0x51u8, 0x52];
        let mut len = 0usize;
        unsafe {
            assert_eq!(script_container_add_script(handle, 1000, script.as_ptr(), script.len()), 0);
            assert_eq!(script_container_add_script(handle, 2500, ptr::null(), 0), 0);
            assert_eq!(script_container_add_script(handle, -1, script.as_ptr(), 1), 2);
            assert_eq!(script_container_add_script(handle, 1, ptr::null(), 3), 2);
            assert_eq!(script_container_len(handle, &mut len), 0);
            assert_eq!(script_container_len(handle, ptr::null_mut()), 2);
        }
        assert_eq!(len, 2);

        script_container_delete(handle);
        script_container_delete(handle);
        unsafe {
            assert_eq!(script_container_add_script(handle, 1, script.as_ptr(), 1), 1);
            assert_eq!(script_container_len(handle, &mut len), 1);
        }
    }
}
