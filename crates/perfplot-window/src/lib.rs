// File: crates/perfplot-window/src/lib.rs
// Summary: Interactive viewer that shows a rendered frame in a window (winit + softbuffer CPU blit)
// and blocks until the window is closed.

use std::ffi::OsStr;
use std::num::NonZeroU32;

use anyhow::{anyhow, bail, Context, Result};
use perfplot_core::{Frame, Viewer};
use tracing::{debug, info};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{Window, WindowBuilder};

/// Window-backed [`Viewer`]. Owns the process's event loop, so create one per
/// process (on the main thread) and reuse it for every figure.
pub struct WindowViewer {
    event_loop: EventLoop<()>,
}

impl WindowViewer {
    /// Open the event loop. Fails with an error, rather than winit's panic,
    /// when no display server can be reached.
    pub fn new() -> Result<Self> {
        let x11 = std::env::var_os("DISPLAY");
        let wayland = std::env::var_os("WAYLAND_DISPLAY");
        if !display_available(x11.as_deref(), wayland.as_deref()) {
            bail!("no display available (DISPLAY and WAYLAND_DISPLAY are unset); save the figure to a file instead");
        }
        // winit 0.28 panics on other connection failures too
        let event_loop = std::panic::catch_unwind(EventLoop::new)
            .map_err(|_| anyhow!("failed to connect to the display server"))?;
        Ok(Self { event_loop })
    }
}

/// X11 and Wayland platforms need one of the display variables set; other
/// platforms always have a display.
fn display_available(x11: Option<&OsStr>, wayland: Option<&OsStr>) -> bool {
    if cfg!(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android")))) {
        [x11, wayland].into_iter().flatten().any(|v| !v.is_empty())
    } else {
        true
    }
}

impl Viewer for WindowViewer {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        let title = if frame.title.is_empty() { "perfplot" } else { frame.title.as_str() };
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(winit::dpi::PhysicalSize::new(frame.width, frame.height))
            .build(&self.event_loop)
            .context("build window")?;

        let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

        let source = to_0rgb(frame);
        let mut failure: Option<anyhow::Error> = None;
        info!(title, "showing figure; close the window (or press Esc) to continue");

        self.event_loop.run_return(|event, _, cf| {
            *cf = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => {
                        *cf = ControlFlow::Exit;
                    }
                    WindowEvent::KeyboardInput {
                        input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(VirtualKeyCode::Escape), .. },
                        ..
                    } => {
                        *cf = ControlFlow::Exit;
                    }
                    WindowEvent::Resized(_) => window.request_redraw(),
                    _ => {}
                },
                Event::RedrawRequested(id) if id == window.id() => {
                    if let Err(e) = present(&mut surface, &window, frame, &source) {
                        failure = Some(e);
                        *cf = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });
        debug!(title, "viewer dismissed");

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Pack RGBA8 into softbuffer's 0RGB u32 layout.
pub fn to_0rgb(frame: &Frame) -> Vec<u32> {
    let mut out = Vec::with_capacity(frame.width as usize * frame.height as usize);
    for row in frame.pixels.chunks_exact(frame.stride).take(frame.height as usize) {
        for px in row.chunks_exact(4).take(frame.width as usize) {
            let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
            out.push((r << 16) | (g << 8) | b);
        }
    }
    out
}

/// Nearest-neighbour fit of a `src_w` x `src_h` image into `dst_w` x `dst_h`.
pub fn fit_nearest(src: &[u32], src_w: usize, src_h: usize, dst: &mut [u32], dst_w: usize, dst_h: usize) {
    if src_w == 0 || src_h == 0 || dst_w == 0 || dst_h == 0 { return; }
    for y in 0..dst_h {
        let sy = y * src_h / dst_h;
        for x in 0..dst_w {
            let sx = x * src_w / dst_w;
            if let (Some(d), Some(&s)) = (dst.get_mut(y * dst_w + x), src.get(sy * src_w + sx)) {
                *d = s;
            }
        }
    }
}

fn present(surface: &mut softbuffer::Surface, window: &Window, frame: &Frame, source: &[u32]) -> Result<()> {
    let size = window.inner_size();
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        // minimized
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("map surface buffer: {e}"))?;
    fit_nearest(source, frame.width as usize, frame.height as usize, &mut buffer, w.get() as usize, h.get() as usize);
    buffer.present().map_err(|e| anyhow!("present frame: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_2x1() -> Frame {
        Frame {
            title: "t".into(),
            width: 2,
            height: 1,
            stride: 8,
            pixels: vec![255, 0, 0, 255, 0, 0, 255, 255],
        }
    }

    #[test]
    fn packs_rgba_into_0rgb() {
        assert_eq!(to_0rgb(&frame_2x1()), vec![0x00FF_0000, 0x0000_00FF]);
    }

    #[test]
    fn nearest_fit_scales_up() {
        let src = to_0rgb(&frame_2x1());
        let mut dst = vec![0u32; 4 * 2];
        fit_nearest(&src, 2, 1, &mut dst, 4, 2);
        let (top, bottom) = dst.split_at(4);
        assert_eq!(top, &[0x00FF_0000, 0x00FF_0000, 0x0000_00FF, 0x0000_00FF]);
        assert_eq!(top, bottom);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn display_needs_x11_or_wayland_on_linux() {
        assert!(!display_available(None, None));
        assert!(!display_available(Some(OsStr::new("")), None));
        assert!(display_available(Some(OsStr::new(":0")), None));
        assert!(display_available(None, Some(OsStr::new("wayland-0"))));
    }
}
