// API operations, grouped by resource. Each file adds an `impl VmwareV1`
// block; every operation has a plain form and a `_with_context` form that
// takes a `CallContext` for deadlines and cancellation.

mod catalog;
mod clusters;
mod director_sites;
mod pvdcs;
mod vdcs;
