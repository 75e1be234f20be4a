/// Elements with a width, measured in JVM operand stack or local variable slots
///
/// Category 1 values (`int`, `float`, references) take one slot while category 2 values (`long`,
/// `double`) take two. Instructions like `pop2` or `dup2_x1` are specified in terms of slots, not
/// values, so the checker needs to know the width of everything it moves around.
pub trait Width {
    fn width(&self) -> usize;
}
