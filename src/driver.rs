//! Invocation modes and their composition.
//!
//! | arguments   | mode                                             |
//! |-------------|--------------------------------------------------|
//! | none        | stitch every (decimated) frame in the data dir   |
//! | `frame`     | show one frame                                   |
//! | `x y z`     | closest-point query, plot, stitch its frames     |
//! | other       | usage                                            |

use crate::display::ImageSink;
use nalgebra::Point3;
use scanstitch_core::{Error, FrameId, Result, ScanConfig};
use scanstitch_photo::{Panorama, StitchOrchestrator, StitchResult, Stitcher};
use scanstitch_plot::{Color, Figure, Style};
use scanstitch_point_cloud::ClosestPoint;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const STITCHED_FRAMES_FILE: &str = "stitched_frames.png";
pub const CLOSEST_POINT_PLOT_FILE: &str = "closest_point.svg";

pub const USAGE: &str = "Expected scanstitch [x: float] [y: float] [z: float] OR scanstitch [number_of_frame: int] OR scanstitch";
pub const NO_SUCH_FRAME: &str = "There is no such frame number!";

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = -1;

const SINGLE_FRAME_TITLE: &str = "Frame of closest point";
const STITCHED_TITLE: &str = "stitched frames";

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Batch,
    ShowFrame(String),
    Query(Point3<f64>),
    Usage,
}

impl Mode {
    /// Select the mode from the arguments after the program name.
    ///
    /// Only a query with a non-numeric coordinate is an error; a wrong
    /// argument count selects [`Mode::Usage`].
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [] => Ok(Mode::Batch),
            [frame] => Ok(Mode::ShowFrame(frame.as_ref().to_string())),
            [x, y, z] => {
                let coordinate = |raw: &S| -> Result<f64> {
                    let raw = raw.as_ref();
                    raw.trim().parse().map_err(|_| {
                        Error::InvalidInput(format!("'{}' is not a floating-point coordinate", raw))
                    })
                };
                Ok(Mode::Query(Point3::new(
                    coordinate(x)?,
                    coordinate(y)?,
                    coordinate(z)?,
                )))
            }
            _ => Ok(Mode::Usage),
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub frames_found: usize,
    pub frames_used: Vec<FrameId>,
    pub output: PathBuf,
    pub frames_deleted: usize,
    pub average_location: Option<PathBuf>,
}

/// Outcome of a closest-point query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryReport {
    pub requested: Point3<f64>,
    pub closest: ClosestPoint,
    pub plot: PathBuf,
    pub single_frame: bool,
}

pub struct Driver<S, P = Stitcher> {
    config: ScanConfig,
    sink: S,
    orchestrator: StitchOrchestrator<P>,
}

impl<S: ImageSink> Driver<S, Stitcher> {
    pub fn new(config: ScanConfig, sink: S) -> Self {
        Self::with_panorama(config, sink, Stitcher::new())
    }
}

impl<S: ImageSink, P: Panorama> Driver<S, P> {
    pub fn with_panorama(config: ScanConfig, sink: S, panorama: P) -> Self {
        Self {
            config,
            sink,
            orchestrator: StitchOrchestrator::with_panorama(panorama),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run the mode chosen by `args` and return the process exit code.
    ///
    /// Messages meant for the user go to `out`; diagnostics go to the log.
    pub fn execute<A: AsRef<str>, W: Write>(&mut self, args: &[A], out: &mut W) -> i32 {
        let mode = match Mode::from_args(args) {
            Ok(mode) => mode,
            Err(e) => {
                tracing::error!("{}", e);
                return EXIT_FAILURE;
            }
        };

        match mode {
            Mode::Usage => {
                let _ = writeln!(out, "{}", USAGE);
                EXIT_USAGE
            }
            Mode::ShowFrame(raw) => {
                if let Err(e) = self.show_frame(&raw) {
                    tracing::debug!("show frame '{}' failed: {}", raw, e);
                    let _ = writeln!(out, "{}", NO_SUCH_FRAME);
                }
                EXIT_OK
            }
            Mode::Batch => match self.batch() {
                Ok(_) => EXIT_OK,
                Err(e) => {
                    tracing::error!("batch stitch failed: {}", e);
                    EXIT_FAILURE
                }
            },
            Mode::Query(point) => match self.query(point, out) {
                Ok(_) => EXIT_OK,
                Err(e) => {
                    tracing::error!("query failed: {}", e);
                    EXIT_FAILURE
                }
            },
        }
    }

    /// Stitch every decimated frame of the data directory into `stitched_frames.png`.
    pub fn batch(&mut self) -> Result<BatchReport> {
        self.config.validate()?;
        let data_path = self.config.data_path.clone();

        let found: Vec<FrameId> = scanstitch_io::list_frame_ids(&data_path)?
            .into_iter()
            .collect();
        let frames_used = scanstitch_point_cloud::decimate(&found, self.config.item_dilution)?;
        tracing::info!(
            "Using {} of {} frames (dilution {})",
            frames_used.len(),
            found.len(),
            self.config.item_dilution
        );

        let image = self.stitch(&frames_used)?.into_image();
        let output = data_path.join(STITCHED_FRAMES_FILE);
        scanstitch_io::save_image(&output, &image)?;

        let frames_deleted = if self.config.delete_frames {
            scanstitch_io::delete_frames(&data_path)?
        } else {
            0
        };

        let average_location = if self.config.save_average_location {
            Some(scanstitch_io::save_average_location(&data_path)?)
        } else {
            None
        };

        Ok(BatchReport {
            frames_found: found.len(),
            frames_used,
            output,
            frames_deleted,
            average_location,
        })
    }

    /// Show the frame named by `raw`.
    pub fn show_frame(&mut self, raw: &str) -> Result<()> {
        let id: FrameId = raw
            .parse()
            .map_err(|_| Error::InvalidInput(format!("'{}' is not a frame number", raw)))?;
        let image = scanstitch_io::load_frame(&self.config.data_path, id)?;
        self.sink.show(&format!("Frame {}", id), &image)
    }

    /// Find the cloud point closest to `requested`, plot it and show its frames.
    pub fn query<W: Write>(&mut self, requested: Point3<f64>, out: &mut W) -> Result<QueryReport> {
        let cloud = scanstitch_io::parse(self.config.cloud_points_path())?;
        let closest = scanstitch_point_cloud::find_closest(&cloud, requested)?;
        let found = closest.record.coordinate();

        writeln!(
            out,
            "We wanted x={:?}, y={:?}, z={:?} and got x={:?}, y={:?}, z={:?}",
            requested.x, requested.y, requested.z, found.x, found.y, found.z
        )?;

        let plot = self.config.data_path.join(CLOSEST_POINT_PLOT_FILE);
        plot_closest_point(&cloud, &requested, found, &plot)?;

        let frame_ids = closest.record.frame_ids().to_vec();
        let result = self.stitch(&frame_ids)?;
        let single_frame = result.is_single_frame();
        match result {
            StitchResult::SingleFrame(img) => self.sink.show(SINGLE_FRAME_TITLE, &img)?,
            StitchResult::Stitched(img) => self.sink.show(STITCHED_TITLE, &img)?,
        }

        Ok(QueryReport {
            requested,
            closest,
            plot,
            single_frame,
        })
    }

    fn stitch(&mut self, frame_ids: &[FrameId]) -> Result<StitchResult> {
        let data_path = self.config.data_path.clone();
        self.orchestrator
            .stitch(frame_ids, |id| scanstitch_io::try_load_frame(&data_path, id))
    }
}

/// Top view of the cloud (x against y) with the requested point in red and
/// the point found in green.
fn plot_closest_point(
    cloud: &scanstitch_core::PointCloud,
    requested: &Point3<f64>,
    found: &Point3<f64>,
    path: &Path,
) -> Result<()> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = cloud.points().map(|p| (p.x, p.y)).unzip();

    let mut figure = Figure::new("Closest point").labels("x", "y");
    let to_err = |e: scanstitch_plot::PlotError| Error::Plot(e.to_string());
    figure
        .scatter(&xs, &ys, "cloud", Style::new(Color::grey()).marker_size(2.0))
        .map_err(to_err)?;
    figure
        .scatter(
            &[requested.x],
            &[requested.y],
            "requested",
            Style::new(Color::red()).marker_size(8.0),
        )
        .map_err(to_err)?;
    figure
        .scatter(
            &[found.x],
            &[found.y],
            "closest",
            Style::new(Color::green()).marker_size(8.0),
        )
        .map_err(to_err)?;

    figure.save(path).map_err(to_err)
}
