//! Checks who frees the bitmap, using an allocator that watches one address.

#![cfg(feature = "alloc")]

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use mono_offscreen::{Drawable, MonoFrameBuffer};

struct TrackingAllocator;

static WATCHED: AtomicUsize = AtomicUsize::new(0);
static WATCHED_FREED: AtomicBool = AtomicBool::new(false);

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        if ptr as usize == WATCHED.load(Ordering::SeqCst) {
            WATCHED_FREED.store(true, Ordering::SeqCst);
        }
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static ALLOCATOR: TrackingAllocator = TrackingAllocator;

// Tests share the watched address.
static SERIAL: Mutex<()> = Mutex::new(());

fn watch(ptr: *const u8) {
    WATCHED_FREED.store(false, Ordering::SeqCst);
    WATCHED.store(ptr as usize, Ordering::SeqCst);
}

fn freed() -> bool {
    WATCHED_FREED.load(Ordering::SeqCst)
}

#[test]
fn owned_bitmap_is_freed_with_the_canvas() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());

    let mut canvas = MonoFrameBuffer::new(84, 48).unwrap();
    assert!(canvas.is_owned());
    canvas.begin_frame().unwrap();
    canvas.fill_rect(0, 0, 84, 48).unwrap();
    canvas.end_frame().unwrap();

    watch(canvas.bitmap().as_ptr());
    assert!(!freed());
    drop(canvas);
    assert!(freed());
    watch(std::ptr::null());
}

#[test]
fn borrowed_bitmap_outlives_the_canvas() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());

    let mut storage = vec![0u8; 84 * 48 / 8];
    watch(storage.as_ptr());

    let mut canvas = MonoFrameBuffer::with_buffer(84, 48, &mut storage).unwrap();
    assert!(!canvas.is_owned());
    canvas.begin_frame().unwrap();
    canvas.draw_pixel(83, 47).unwrap();
    canvas.end_frame().unwrap();
    drop(canvas);

    assert!(!freed());
    assert_eq!(storage[storage.len() - 1], 0x80);

    drop(storage);
    assert!(freed());
    watch(std::ptr::null());
}
