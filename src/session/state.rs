use crate::capture::image::BackgroundImage;
use crate::config::OverlayStyle;
use crate::domain::{
    AngleAnnotation, PendingSelection, Point, SelectionState, SelectionStep, Size,
    device_to_image_pixel, image_pixel_to_normalized, normalized_to_image_pixel,
};
use crate::error::{AnnotationError, Result, ensure_finite};
use crate::session::messages::{OverlayInstruction, RenderCommand};

/// Point collection and angle history for one background image
///
/// Every operation runs to completion synchronously. Operations that fail leave
/// the session exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct Session {
    background: Option<BackgroundImage>,
    history: Vec<AngleAnnotation>,
    pending: PendingSelection,
    style: OverlayStyle,
}

impl Session {
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn state(&self) -> SelectionState {
        self.pending.state()
    }

    /// First point of the pair currently being collected
    pub fn pending(&self) -> Option<Point> {
        self.pending.first()
    }

    /// Completed pairs, oldest first
    pub fn history(&self) -> &[AngleAnnotation] {
        &self.history
    }

    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    /// Size of the current image-pixel space, if an image is loaded
    pub fn image_size(&self) -> Option<Size> {
        self.background.as_ref().map(BackgroundImage::size)
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Add one point to the pair being collected
    ///
    /// Every point yields a marker. The second point also completes the pair,
    /// records it in the history and yields the full overlay after its marker.
    pub fn select_point(&mut self, point: Point) -> Result<Vec<RenderCommand>> {
        ensure_finite(&[point.x, point.y])?;

        let marker = RenderCommand::DrawMarker {
            point,
            color: self.style.marker_color,
        };
        match self.pending.push(point) {
            SelectionStep::Started(point) => {
                log::debug!("First point selected at ({:.2}, {:.2})", point.x, point.y);
                Ok(vec![marker])
            }
            SelectionStep::Completed(annotation) => Ok(vec![marker, self.record(annotation)]),
        }
    }

    /// Add a point clicked on the rendering surface
    ///
    /// `surface` is the on-screen size of the surface; the click is scaled into
    /// image-pixel space using the loaded background's dimensions.
    pub fn select_point_at_device(
        &mut self,
        device_x: f64,
        device_y: f64,
        surface: Size,
    ) -> Result<Vec<RenderCommand>> {
        ensure_finite(&[device_x, device_y])?;
        let image = self.image_size().ok_or(AnnotationError::NoBackgroundImage)?;
        let point = device_to_image_pixel(device_x, device_y, surface, image)?;
        self.select_point(point)
    }

    /// Measure a complete pair given in image-pixel coordinates
    ///
    /// Any half-collected click pair is left untouched.
    pub fn select_point_at_pixel(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Result<RenderCommand> {
        self.validate_entry(&[x1, y1, x2, y2])?;
        let annotation = AngleAnnotation::from_pair(Point::new(x1, y1), Point::new(x2, y2));
        Ok(self.record(annotation))
    }

    /// Measure a complete pair given in normalized image coordinates
    pub fn select_point_at_normalized(
        &mut self,
        nx1: f64,
        ny1: f64,
        nx2: f64,
        ny2: f64,
    ) -> Result<RenderCommand> {
        self.validate_entry(&[nx1, ny1, nx2, ny2])?;
        let image = self.image_size().ok_or(AnnotationError::NoBackgroundImage)?;

        let p1 = normalized_to_image_pixel(nx1, ny1, image);
        let p2 = normalized_to_image_pixel(nx2, ny2, image);
        Ok(self.record(AngleAnnotation::from_pair(p1, p2)))
    }

    /// Normalized coordinates of an image-pixel point on the current background
    pub fn to_normalized(&self, point: Point) -> Result<(f64, f64)> {
        image_pixel_to_normalized(point, self.image_size())
    }

    /// Replace the background image
    ///
    /// History and any pending point are dropped: they are positioned relative to
    /// the previous image.
    pub fn set_background_image(&mut self, image: BackgroundImage) -> RenderCommand {
        log::info!(
            "Background image set: {}x{} ({} annotations discarded)",
            image.width(),
            image.height(),
            self.history.len()
        );
        self.history.clear();
        self.pending.clear();
        self.background = Some(image.clone());
        RenderCommand::ResetSurface(image)
    }

    /// Drop the pending point and every annotation, returning to the bare image
    pub fn clear(&mut self) -> RenderCommand {
        log::debug!("Clearing {} annotations", self.history.len());
        self.pending.clear();
        self.history.clear();
        match &self.background {
            Some(image) => RenderCommand::ResetSurface(image.clone()),
            None => RenderCommand::ClearSurface,
        }
    }

    fn validate_entry(&self, values: &[f64]) -> Result<()> {
        ensure_finite(values).inspect_err(|err| log::warn!("Rejected coordinate entry: {err}"))
    }

    fn record(&mut self, annotation: AngleAnnotation) -> RenderCommand {
        log::debug!(
            "Angle {} over length {:.2}; {}",
            annotation.label(),
            annotation.line_length,
            annotation.points_summary()
        );
        self.history.push(annotation);
        RenderCommand::DrawOverlay(OverlayInstruction::new(&annotation, self.style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShapeColor;
    use image::RgbaImage;

    fn image(width: u32, height: u32) -> BackgroundImage {
        BackgroundImage::new(RgbaImage::new(width, height)).unwrap()
    }

    #[test]
    fn test_first_point_draws_marker() {
        let mut session = Session::default();
        let commands = session.select_point(Point::new(5.0, 6.0)).unwrap();

        assert_eq!(
            commands,
            [RenderCommand::DrawMarker {
                point: Point::new(5.0, 6.0),
                color: OverlayStyle::default().marker_color,
            }]
        );
        assert_eq!(session.state(), SelectionState::OneSelected);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_second_point_completes_pair() {
        let mut session = Session::default();
        session.select_point(Point::new(0.0, 0.0)).unwrap();
        let commands = session.select_point(Point::new(100.0, 0.0)).unwrap();

        let [marker, RenderCommand::DrawOverlay(overlay)] = commands.as_slice() else {
            panic!("expected marker then overlay, got {commands:?}");
        };
        assert_eq!(
            marker,
            &RenderCommand::DrawMarker {
                point: Point::new(100.0, 0.0),
                color: OverlayStyle::default().marker_color,
            }
        );
        assert_eq!(overlay.p2, Point::new(100.0, 0.0));
        assert_eq!(overlay.angle_degrees, 0.0);
        assert_eq!(overlay.line_length, 100.0);
        assert_eq!(session.state(), SelectionState::Empty);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_overlay_carries_session_style() {
        let style = OverlayStyle {
            marker_color: ShapeColor::BLUE,
            arc_color: ShapeColor::BLACK,
            line_width: 2.5,
            ..OverlayStyle::default()
        };
        let mut session = Session::new(style);
        session.select_point(Point::new(1.0, 1.0)).unwrap();
        let commands = session.select_point(Point::new(4.0, 5.0)).unwrap();

        assert_eq!(
            commands[0],
            RenderCommand::DrawMarker {
                point: Point::new(4.0, 5.0),
                color: ShapeColor::BLUE,
            }
        );
        let RenderCommand::DrawOverlay(overlay) = &commands[1] else {
            panic!("expected overlay, got {commands:?}");
        };
        assert_eq!(overlay.style, style);
    }

    #[test]
    fn test_pixel_entry_draws_overlay_only() {
        let mut session = Session::default();
        let cmd = session.select_point_at_pixel(0.0, 0.0, 5.0, -0.0).unwrap();

        let RenderCommand::DrawOverlay(overlay) = &cmd else {
            panic!("expected overlay, got {cmd:?}");
        };
        // Signed zero in the entry must not show as "-0.00°"
        assert_eq!(overlay.label(), "0.00°");
        assert_eq!(session.history()[0].label(), "0.00°");
    }

    #[test]
    fn test_vertical_pair_is_90_degrees() {
        let mut session = Session::default();
        session.select_point(Point::new(0.0, 0.0)).unwrap();
        session.select_point(Point::new(0.0, 100.0)).unwrap();

        let annotation = session.history()[0];
        assert!((annotation.angle_degrees - 90.0).abs() < 1e-9);
        assert_eq!(annotation.line_length, 100.0);
    }

    #[test]
    fn test_clear_after_one_point() {
        let mut session = Session::default();
        session.select_point(Point::new(1.0, 1.0)).unwrap();

        assert_eq!(session.clear(), RenderCommand::ClearSurface);
        assert_eq!(session.state(), SelectionState::Empty);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_clear_redraws_background() {
        let mut session = Session::default();
        let img = image(20, 10);
        session.set_background_image(img.clone());
        session.select_point_at_pixel(0.0, 0.0, 5.0, 5.0).unwrap();

        assert_eq!(session.clear(), RenderCommand::ResetSurface(img));
        assert!(session.history().is_empty());
        assert!(session.background().is_some());
    }

    #[test]
    fn test_new_image_resets_history_and_pending() {
        let mut session = Session::default();
        session.set_background_image(image(100, 100));
        session.select_point_at_pixel(0.0, 0.0, 10.0, 10.0).unwrap();
        session.select_point(Point::new(3.0, 3.0)).unwrap();

        let second = image(50, 40);
        let cmd = session.set_background_image(second.clone());

        assert_eq!(cmd, RenderCommand::ResetSurface(second));
        assert!(session.history().is_empty());
        assert_eq!(session.pending(), None);
        assert_eq!(session.image_size(), Some(Size::from((50, 40))));
    }

    #[test]
    fn test_normalized_without_image() {
        let mut session = Session::default();
        let result = session.select_point_at_normalized(0.0, 0.0, 1.0, 1.0);

        assert_eq!(result, Err(AnnotationError::NoBackgroundImage));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_normalized_pair() {
        let mut session = Session::default();
        session.set_background_image(image(200, 100));
        session.select_point_at_normalized(0.0, 0.0, 0.5, 1.0).unwrap();

        let annotation = session.history()[0];
        assert_eq!(annotation.point2, Point::new(100.0, 100.0));
        assert!((annotation.angle_degrees - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_entry_rejects_non_finite() {
        let mut session = Session::default();
        session.select_point(Point::new(1.0, 2.0)).unwrap();

        let result = session.select_point_at_pixel(0.0, f64::NAN, 1.0, 1.0);
        assert!(matches!(result, Err(AnnotationError::InvalidInput(_))));
        let result = session.select_point_at_normalized(f64::INFINITY, 0.0, 1.0, 1.0);
        assert!(matches!(result, Err(AnnotationError::InvalidInput(_))));

        assert!(session.history().is_empty());
        assert_eq!(session.pending(), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_pixel_entry_keeps_pending_click() {
        let mut session = Session::default();
        session.select_point(Point::new(1.0, 2.0)).unwrap();
        session.select_point_at_pixel(0.0, 0.0, 3.0, 4.0).unwrap();

        assert_eq!(session.pending(), Some(Point::new(1.0, 2.0)));
        assert_eq!(session.history()[0].line_length, 5.0);
    }

    #[test]
    fn test_device_click_scales_to_image() {
        let mut session = Session::default();
        assert_eq!(
            session.select_point_at_device(1.0, 1.0, Size::from((10, 10))),
            Err(AnnotationError::NoBackgroundImage)
        );

        session.set_background_image(image(800, 600));
        let surface = Size::new(400.0, 300.0).unwrap();
        session.select_point_at_device(100.0, 50.0, surface).unwrap();
        assert_eq!(session.pending(), Some(Point::new(200.0, 100.0)));
    }

    #[test]
    fn test_device_click_zero_surface_leaves_state() {
        let mut session = Session::default();
        session.set_background_image(image(8, 8));
        let surface = Size {
            width: 0.0,
            height: 0.0,
        };
        let result = session.select_point_at_device(1.0, 1.0, surface);
        assert!(matches!(
            result,
            Err(AnnotationError::InvalidGeometry { .. })
        ));
        assert_eq!(session.state(), SelectionState::Empty);
    }

    #[test]
    fn test_to_normalized() {
        let mut session = Session::default();
        assert_eq!(
            session.to_normalized(Point::new(1.0, 1.0)),
            Err(AnnotationError::NoBackgroundImage)
        );
        session.set_background_image(image(4, 2));
        assert_eq!(session.to_normalized(Point::new(1.0, 1.0)), Ok((0.25, 0.5)));
    }
}
