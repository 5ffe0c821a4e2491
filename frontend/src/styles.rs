pub const WIDGET: &str = "max-w-md mx-auto px-4 sm:px-6 py-6 bg-white dark:bg-gray-800 rounded-2xl shadow-xl border border-gray-100 dark:border-gray-700";
pub const GAME: &str = "mt-6 flex flex-col items-center gap-4";

pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "min-h-[1.25rem] text-sm text-red-500 dark:text-red-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";

pub const FORM: &str = "mt-4 space-y-2";
pub const FORM_ROW: &str = "flex flex-col";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600 disabled:opacity-60";
pub const INPUT_ERROR: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-inset focus:ring-red-500 sm:text-sm";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg hover:shadow-xl transition-all duration-300";

// Spin button
pub const SPIN_BUTTON: &str = "relative px-8 py-4 rounded-full font-bold text-lg text-white transition-all duration-300 focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50";
pub const SPIN_BUTTON_ACTIVE: &str = "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg hover:shadow-xl";
pub const SPIN_BUTTON_DISABLED: &str = "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed";

// Result area
pub const RESULT_BOX: &str = "w-full text-center bg-gray-50 dark:bg-gray-700/30 p-4 rounded-xl shadow-sm text-gray-800 dark:text-gray-200";
pub const RESULT_HEADLINE: &str = "font-bold text-lg";
pub const RESULT_SUBLINE: &str = "text-sm text-gray-500 dark:text-gray-400";

// Wheel
pub const WHEEL_WRAPPER: &str = "relative w-full max-w-[400px] mx-auto";
pub const WHEEL_POINTER: &str = "absolute left-1/2 -translate-x-1/2 -top-1 z-10 text-2xl text-red-600";
pub const WHEEL_SPINNING: &str = "animate-spin";
