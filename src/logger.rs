use std::{
    fs,
    io::{self, Write},
    path::Path,
    sync::mpsc,
    thread,
};

pub use data::log::Error;

/// حداکثر اندازه‌ی فایل لاگ یک اجرا (۱۰ مگابایت)
const MAX_LOG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// اهداف لاگ که سطح آن‌ها با RUST_LOG کنترل می‌شود
const TARGETS: [&str; 3] = ["mocktrade", "data", "exchange"];

/// پیام‌های ارسالی به ترد نویسنده‌ی لاگ
enum Command {
    Write(Vec<u8>), // محتوای قالب‌بندی شده
    Flush,          // تخلیه‌ی بافر فایل
}

/// راه‌اندازی سیستم لاگ برنامه
///
/// در حالت دیباگ خروجی به کنسول می‌رود و در حالت عادی به فایل
/// `mocktrade-current.log` در پوشه‌ی داده‌ها.
pub fn setup(is_debug: bool) -> Result<(), Error> {
    let default_level = if is_debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    let level_filter = std::env::var("RUST_LOG")
        .ok()
        .as_deref()
        .map(str::parse::<log::Level>)
        .transpose()?
        .unwrap_or(default_level)
        .to_level_filter();

    let mut sink = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}:{} -- {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            message
        ));
    });

    if is_debug {
        sink = sink.chain(io::stdout());
    } else {
        let log_path = data::log::path()?;
        rotate(&log_path)?;

        let writer: Box<dyn Write + Send> = Box::new(ChannelWriter::spawn(&log_path)?);
        sink = sink.chain(writer);
    }

    let dispatch = TARGETS.iter().fold(
        fern::Dispatch::new()
            .level(log::LevelFilter::Off)
            .level_for("panic", log::LevelFilter::Error)
            .level_for("iced_wgpu", log::LevelFilter::Warn),
        |dispatch, target| dispatch.level_for(*target, level_filter),
    );

    dispatch.chain(sink).apply()?;

    Ok(())
}

/// انتقال لاگ اجرای قبلی به `mocktrade-previous.log`
fn rotate(log_path: &Path) -> io::Result<()> {
    let dir = log_path.parent().unwrap_or(Path::new("."));
    let previous = dir.join(data::log::PREVIOUS_LOG_FILE);

    if previous.exists() {
        fs::remove_file(&previous)?;
    }
    if log_path.exists() {
        fs::rename(log_path, &previous)?;
    }

    Ok(())
}

/// نویسنده‌ای که بایت‌ها را به ترد پس‌زمینه می‌فرستد تا حلقه‌ی رابط کاربری
/// منتظر دیسک نماند
struct ChannelWriter {
    sender: mpsc::Sender<Command>,
}

impl ChannelWriter {
    fn spawn(path: &Path) -> io::Result<Self> {
        let mut file = CappedFile::open(path)?;
        let (sender, receiver) = mpsc::channel::<Command>();

        thread::Builder::new()
            .name("log-writer".to_string())
            .spawn(move || {
                // با بسته شدن همه‌ی فرستنده‌ها حلقه تمام می‌شود
                for command in receiver {
                    let result = match command {
                        Command::Write(bytes) => file.write_all(&bytes),
                        Command::Flush => file.flush(),
                    };
                    if let Err(e) = result {
                        eprintln!("Logging error: {e}");
                    }
                }
            })?;

        Ok(Self { sender })
    }

    fn send(&self, command: Command) -> io::Result<()> {
        self.sender
            .send(command)
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "Log writer disconnected"))
    }
}

impl Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.send(Command::Write(buf.to_vec()))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.send(Command::Flush)
    }
}

/// فایل لاگ با سقف اندازه؛ پس از رسیدن به سقف، باقی لاگ‌ها دور ریخته می‌شوند
struct CappedFile {
    file: fs::File,
    size: u64,
    truncated: bool, // آیا پیام رسیدن به سقف نوشته شده است؟
}

impl CappedFile {
    fn open(path: &Path) -> io::Result<Self> {
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        let size = file.metadata()?.len();

        Ok(Self {
            file,
            size,
            truncated: false,
        })
    }
}

impl Write for CappedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.size + buf.len() as u64 > MAX_LOG_FILE_SIZE {
            if !self.truncated {
                self.truncated = true;
                let notice = format!(
                    "{}:WARN -- Log file reached {MAX_LOG_FILE_SIZE} bytes, dropping further output\n",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                );
                self.file.write_all(notice.as_bytes())?;
            }
            return Ok(buf.len());
        }

        let written = self.file.write(buf)?;
        self.size += written as u64;

        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
