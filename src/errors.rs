// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get at everything `error_chain!` creates.
use error_chain::error_chain;

use crate::cells::Position;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        DocOptFailure(::docopt::Error);
        ImageError(::image::ImageError);
    }

    errors {
        OutOfBounds(pos: Position) {
            description("grid position out of bounds")
            display("position {} is outside the grid", pos)
        }
        InvalidDimensions(width: usize, height: usize) {
            description("invalid maze dimensions")
            display("maze dimensions {}x{} must both be odd and at least 5", width, height)
        }
        InvalidMove(dx: i32, dy: i32) {
            description("invalid player move")
            display("move ({}, {}) is not a single cardinal step", dx, dy)
        }
        NoPathFound(from: Position, to: Position) {
            description("no path through the maze")
            display("no path from {} to {}", from, to)
        }
        InvalidConfig(reason: String) {
            description("invalid configuration")
            display("invalid configuration: {}", reason)
        }
    }
}
