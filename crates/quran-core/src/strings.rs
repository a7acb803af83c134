//! Fixed Arabic UI strings.

pub const MECCAN: &str = "مكية";
pub const MEDINAN: &str = "مدنية";
pub const VERSES: &str = "آية";
pub const CHAPTER_PREFIX: &str = "سورة";
pub const RECITER_PREFIX: &str = "القارئ:";

pub const CATALOG_LOAD_FAILED: &str = "عذراً، حدث خطأ في تحميل سور القرآن";
pub const CHAPTER_LOAD_FAILED: &str = "عذراً، حدث خطأ في تحميل محتوى السورة";
pub const AZKAR_LOAD_FAILED: &str = "عذراً، حدث خطأ في تحميل الأدعية والأذكار";
pub const HADITH_LOAD_FAILED: &str = "عذراً، حدث خطأ في تحميل الأحاديث";
pub const PLAYBACK_FAILED: &str = "عذراً، حدث خطأ في تحميل التلاوة. يرجى المحاولة مرة أخرى.";

pub const LOADING: &str = "جاري التحميل...";
pub const NO_RESULTS: &str = "لا توجد نتائج";
pub const EMPTY_GLOBAL_QUERY: &str = "يرجى إدخال نص للبحث";
pub const CHOOSE_RECITER_FIRST: &str = "يرجى اختيار قارئ أولاً";
pub const CHOOSE_RECITER: &str = "اختر القارئ...";
pub const CHOOSE_COUNTRY: &str = "اختر الدولة...";
pub const NOTHING_TO_DOWNLOAD: &str = "لا يوجد ملف صوتي للتحميل";
pub const DOWNLOAD_STARTED: &str = "جارٍ تحميل التلاوة...";
pub const DOWNLOAD_DONE: &str = "تم حفظ التلاوة في";
pub const DOWNLOAD_FAILED: &str = "تعذر تحميل التلاوة";

pub const HINT_CONNECTION: &str = "تحقق من اتصالك بالإنترنت ثم حاول مرة أخرى";
pub const HINT_TIMEOUT: &str = "انتهت مهلة الطلب، الخادم بطيء حالياً";
pub const HINT_DECODE: &str = "وصلت استجابة غير متوقعة من الخادم";

pub const SHARE_TITLE: &str = "موقع القرآن الكريم والأحاديث النبوية";
pub const SHARE_TEXT: &str =
    "موقع متكامل للقرآن الكريم، الأحاديث النبوية، الأدعية والأذكار، ومواقيت الصلاة";
pub const SHARE_COPIED: &str = "تم نسخ رابط الموقع إلى الحافظة! يمكنك الآن مشاركته.";
pub const SHARE_MANUAL: &str = "انسخ الرابط التالي لمشاركته:";

pub const PRAYER_NAMES: [&str; 5] = ["الفجر", "الظهر", "العصر", "المغرب", "العشاء"];
