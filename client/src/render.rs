/// Local canvas the player sees. All coordinates and widths are in local
/// canvas pixels.
pub trait Renderer {
    fn draw_line(&self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64);
    fn fill(&self, x: f64, y: f64, color: &str);
    fn clear(&self);
}
