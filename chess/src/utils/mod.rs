mod prng;

pub use prng::PRNG;

/// Allocates a zero initialised `T` directly on the heap. Large lookup tables go through here so
/// they are never materialised on the stack first.
///
/// ## Safety
/// - The all-zero bit pattern must be a valid `T`
/// - `T` must not be zero sized
pub unsafe fn box_zeroed<T>() -> Box<T> {
    let layout = std::alloc::Layout::new::<T>();
    debug_assert!(layout.size() != 0, "zero sized allocation");

    unsafe {
        let ptr = std::alloc::alloc_zeroed(layout);
        if ptr.is_null() {
            std::alloc::handle_alloc_error(layout);
        }
        Box::from_raw(ptr.cast())
    }
}
