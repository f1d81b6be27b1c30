use std::ptr;

pub unsafe fn swap_unchecked<S, T>(slice: &mut S, index0: usize, index1: usize)
where
    S: AsMut<[T]>,
{
    let slice = slice.as_mut();

    unsafe {
        let value0 = slice.as_mut_ptr().add(index0);
        let value1 = slice.as_mut_ptr().add(index1);
        ptr::swap_nonoverlapping(value0, value1, 1)
    }
}

